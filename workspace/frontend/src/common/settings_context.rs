use yew::prelude::*;

use crate::settings::{self, AppSettings};

#[derive(Clone, PartialEq)]
pub struct SettingsContext {
    pub settings: AppSettings,
    pub save: Callback<AppSettings>,
}

#[derive(Properties, PartialEq)]
pub struct SettingsProviderProps {
    pub children: Children,
}

/// Holds the live settings. Saving persists them and re-renders consumers;
/// a new log level takes effect on the next page load.
#[function_component(SettingsProvider)]
pub fn settings_provider(props: &SettingsProviderProps) -> Html {
    let current = use_state(settings::get_settings);

    let save = {
        let current = current.clone();
        Callback::from(move |updated: AppSettings| {
            if let Err(e) = updated.save_to_storage() {
                log::error!("Failed to persist settings: {:?}", e);
            }
            log::info!("Settings updated: {:?}", updated);
            settings::update_settings(|s| *s = updated.clone());
            current.set(updated);
        })
    };

    let context = SettingsContext {
        settings: (*current).clone(),
        save,
    };

    html! {
        <ContextProvider<SettingsContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SettingsContext>>
    }
}

use yew::prelude::*;

use crate::api_client::ApiClient;
use crate::common::settings_context::SettingsContext;
use crate::settings::{self, AppSettings};

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Current settings, falling back to the stored ones outside a provider.
#[hook]
pub fn use_settings() -> AppSettings {
    match use_context::<SettingsContext>() {
        Some(ctx) => ctx.settings,
        None => settings::get_settings(),
    }
}

/// Client configured from the current settings.
#[hook]
pub fn use_api_client() -> ApiClient {
    let settings = use_settings();
    ApiClient::new(settings.api_config())
}

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::settings_context::SettingsContext;
use crate::common::toast::ToastContext;
use crate::settings::{self, parse_log_level, AppSettings};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[function_component(Settings)]
pub fn settings() -> Html {
    let ctx = use_context::<SettingsContext>();
    let toast_ctx = use_context::<ToastContext>();
    let draft = {
        let initial = ctx.as_ref().map(|c| c.settings.clone());
        use_state(move || initial.unwrap_or_else(settings::get_settings))
    };

    let on_text = |apply: fn(&mut AppSettings, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_base_url = on_text(|s, v| s.api_base_url = v);
    let on_periods = on_text(|s, v| {
        if let Ok(periods) = v.parse() {
            s.forecast_periods = periods;
        }
    });
    let on_limit = on_text(|s, v| {
        if let Ok(limit) = v.parse() {
            s.price_limit = limit;
        }
    });
    let on_period = on_text(|s, v| s.portfolio_period = v);

    let on_level = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(level) = parse_log_level(&select.value()) {
                let mut next = (*draft).clone();
                next.log_level = level;
                draft.set(next);
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let save = ctx.map(|c| c.save);
        Callback::from(move |_| {
            let mut next = (*draft).clone();
            next.api_base_url = next.api_base_url.trim().to_string();
            if next.api_base_url.is_empty() {
                next.api_base_url = AppSettings::default().api_base_url;
            }
            let Some(save) = &save else {
                log::error!("Settings page rendered outside SettingsProvider");
                return;
            };
            save.emit(next);
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_success("Settings saved".to_string());
            }
        })
    };

    let on_reset = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(AppSettings::default()))
    };

    let current_level = draft.log_level.as_str().to_lowercase();

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <label class="form-control w-full mt-4">
                        <div class="label"><span class="label-text">{"API Base URL"}</span></div>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="/api"
                            value={draft.api_base_url.clone()}
                            oninput={on_base_url}
                        />
                    </label>
                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">{"Log level (applies after reload)"}</span></div>
                        <select class="select select-bordered w-full" onchange={on_level}>
                            {for LOG_LEVELS.iter().map(|level| html! {
                                <option value={*level} selected={current_level == *level}>{*level}</option>
                            })}
                        </select>
                    </label>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Analysis Settings"}</h2>
                    <label class="form-control w-full mt-4">
                        <div class="label"><span class="label-text">{"Forecast days"}</span></div>
                        <input
                            type="number"
                            min="1"
                            class="input input-bordered w-full"
                            value={draft.forecast_periods.to_string()}
                            oninput={on_periods}
                        />
                    </label>
                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">{"Recent prices shown"}</span></div>
                        <input
                            type="number"
                            min="1"
                            class="input input-bordered w-full"
                            value={draft.price_limit.to_string()}
                            oninput={on_limit}
                        />
                    </label>
                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">{"Portfolio history window"}</span></div>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="1y"
                            value={draft.portfolio_period.clone()}
                            oninput={on_period}
                        />
                    </label>
                </div>
            </div>

            <div class="card-actions justify-end md:col-span-2">
                <button class="btn btn-ghost" onclick={on_reset}>{"Reset to defaults"}</button>
                <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
            </div>
        </div>
    }
}

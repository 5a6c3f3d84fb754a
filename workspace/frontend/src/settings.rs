use common::ApiConfig;
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const KEY_API_BASE_URL: &str = "stock_analyzer_api_base_url";
const KEY_LOG_LEVEL: &str = "stock_analyzer_log_level";
const KEY_FORECAST_PERIODS: &str = "stock_analyzer_forecast_periods";
const KEY_PRICE_LIMIT: &str = "stock_analyzer_price_limit";
const KEY_PORTFOLIO_PERIOD: &str = "stock_analyzer_portfolio_period";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Root of the analysis API, relative ("/api") or absolute
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Forecast horizon requested by the analysis page
    pub forecast_periods: u32,

    /// Rows shown in the recent prices table
    pub price_limit: u32,

    /// History window used by the portfolio optimizer
    pub portfolio_period: String,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let api = ApiConfig::default();
        Self {
            api_base_url: api.base_url,
            log_level: Level::Info,
            debug_mode: false,
            forecast_periods: api.forecast_periods,
            price_limit: api.price_limit,
            portfolio_period: api.portfolio_period,
            toast_duration_ms: 5000,
        }
    }
}

pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(base_url)) = storage.get_item(KEY_API_BASE_URL) {
                if !base_url.trim().is_empty() {
                    settings.api_base_url = base_url;
                }
            }

            if let Ok(Some(level)) = storage.get_item(KEY_LOG_LEVEL) {
                settings.log_level = parse_log_level(&level).unwrap_or(settings.log_level);
            }

            if let Ok(Some(periods)) = storage.get_item(KEY_FORECAST_PERIODS) {
                if let Ok(periods) = periods.parse::<u32>() {
                    settings.forecast_periods = periods;
                }
            }

            if let Ok(Some(limit)) = storage.get_item(KEY_PRICE_LIMIT) {
                if let Ok(limit) = limit.parse::<u32>() {
                    settings.price_limit = limit;
                }
            }

            if let Ok(Some(period)) = storage.get_item(KEY_PORTFOLIO_PERIOD) {
                if !period.trim().is_empty() {
                    settings.portfolio_period = period;
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(KEY_API_BASE_URL, &self.api_base_url)?;
                storage.set_item(KEY_LOG_LEVEL, &self.log_level.as_str().to_lowercase())?;
                storage.set_item(KEY_FORECAST_PERIODS, &self.forecast_periods.to_string())?;
                storage.set_item(KEY_PRICE_LIMIT, &self.price_limit.to_string())?;
                storage.set_item(KEY_PORTFOLIO_PERIOD, &self.portfolio_period)?;
            }
        }
        Ok(())
    }

    /// Client configuration handed to every API call
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            forecast_periods: self.forecast_periods,
            price_limit: self.price_limit,
            portfolio_period: self.portfolio_period.clone(),
            ..ApiConfig::default()
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

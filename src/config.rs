use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_CURRENCY_SYMBOL;

const SETTINGS_KEY: &str = "settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
    /// Empty means same origin as the page.
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            currency_code: "USD".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            api_base_url: String::new(),
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<AppSettings>(raw) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring malformed settings: {}", err);
                AppSettings::default()
            }
        }
    }

    pub fn with_currency(&self, code: &str) -> Self {
        AppSettings {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
            ..self.clone()
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "PHP" => "₱",
        _ => "$",
    }
}

pub const SUPPORTED_CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "JPY", "PHP"];

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_settings() -> AppSettings {
    if let Some(storage) = storage() {
        if let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) {
            return AppSettings::from_json(&raw);
        }
    }
    AppSettings::default()
}

pub fn save_settings(settings: &AppSettings) {
    if let Some(storage) = storage() {
        match serde_json::to_string(settings) {
            Ok(raw) => {
                if storage.set_item(SETTINGS_KEY, &raw).is_err() {
                    log::warn!("Could not persist settings");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {}", err),
        }
    }
}

//! Startup Configuration
//!
//! Reads [`AppConfig`] from `window.__CHUMS_CONFIG__`, given either as a JS
//! object or as JSON text. Anything missing falls back to defaults.

use chums_core::AppConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__CHUMS_CONFIG__";

pub fn load_config() -> AppConfig {
    let Some(window) = web_sys::window() else {
        return AppConfig::default();
    };
    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => {
            log::info!("[CONFIG] no {} found, using defaults", CONFIG_GLOBAL);
            return AppConfig::default();
        }
    };

    let parsed = match raw.as_string() {
        Some(text) => AppConfig::from_json(&text).map_err(|e| e.to_string()),
        None => serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string()),
    };
    parsed.unwrap_or_else(|e| {
        log::error!("[CONFIG] invalid {}: {}", CONFIG_GLOBAL, e);
        AppConfig::default()
    })
}

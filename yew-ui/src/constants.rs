// SPDX-License-Identifier: MIT OR Apache-2.0

use roomlink_client::{HttpTokenProvider, TokenClient};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Deployment configuration injected by the hosting page as
/// `window.__APP_CONFIG`. Read at runtime so the same bundle can be pointed at
/// different token services.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "tokenApiBaseUrl")]
    pub token_api_base_url: String,
    #[serde(rename = "defaultAppId")]
    #[serde(default)]
    pub default_app_id: Option<String>,
    #[serde(rename = "defaultChannel")]
    #[serde(default)]
    pub default_channel: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().expect("window");
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn token_api_base_url() -> Result<String, String> {
    app_config().map(|c| c.token_api_base_url)
}

pub fn default_app_id() -> String {
    app_config()
        .ok()
        .and_then(|c| c.default_app_id)
        .unwrap_or_default()
}

pub fn default_channel() -> String {
    app_config()
        .ok()
        .and_then(|c| c.default_channel)
        .unwrap_or_default()
}

pub fn token_provider() -> Result<HttpTokenProvider, String> {
    let base_url = token_api_base_url()?;
    Ok(HttpTokenProvider::new(TokenClient::new(&base_url)))
}

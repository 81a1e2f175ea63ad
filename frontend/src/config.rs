use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

const ENV_GLOBAL: &str = "__CLINIC_ADMIN_ENV";
const CONFIG_GLOBAL: &str = "__CLINIC_ADMIN_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub backend_url: Option<String>,
}

static BACKEND_URL: OnceLock<String> = OnceLock::new();

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

// window.__CLINIC_ADMIN_ENV = { BACKEND_URL: "..." } (env.js) wins over
// window.__CLINIC_ADMIN_CONFIG = { backend_url: "..." }.
fn snapshot_from_globals() -> Option<String> {
    read_global(ENV_GLOBAL, ["BACKEND_URL", "backend_url"])
        .or_else(|| read_global(CONFIG_GLOBAL, ["backend_url", "BACKEND_URL"]))
}

pub(crate) fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = BACKEND_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(w)) = (&cfg.backend_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"backend_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the backend base URL once and caches it for the session.
pub async fn await_backend_url() -> String {
    if let Some(cached) = BACKEND_URL.get() {
        return cached.clone();
    }
    if cfg!(not(target_arch = "wasm32")) {
        return cache_base_url(DEFAULT_BACKEND_URL);
    }
    if let Some(existing) = snapshot_from_globals().as_deref().and_then(normalize_base_url) {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.backend_url.as_deref().and_then(normalize_base_url) {
            return cache_base_url(&url);
        }
    }
    log::warn!(
        "No backend URL configured, falling back to {}",
        DEFAULT_BACKEND_URL
    );
    cache_base_url(DEFAULT_BACKEND_URL)
}

pub async fn init() {
    let url = await_backend_url().await;
    log::info!("Backend URL resolved to {}", url);
}

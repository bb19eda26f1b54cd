use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_AUTH_URL: &str = "http://localhost:54321/auth/v1";

/// Settings loaded at start-up from `env.js` or `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub auth_url: Option<String>,
    pub anon_key: Option<String>,
    #[serde(default)]
    pub verify_grace_ms: Option<u64>,
    #[serde(default)]
    pub fallback_redirect_ms: Option<u64>,
    #[serde(default)]
    pub redirect_delay_ms: Option<u64>,
}

impl RuntimeConfig {
    pub fn auth_url(&self) -> String {
        self.auth_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_AUTH_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Blank keys count as absent so no empty `apikey` header is sent.
    pub fn anon_key(&self) -> Option<String> {
        self.anon_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }

    pub fn timings(&self) -> ResetTimings {
        let defaults = ResetTimings::default();
        ResetTimings {
            verify_grace: self
                .verify_grace_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.verify_grace),
            fallback_redirect: self
                .fallback_redirect_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.fallback_redirect),
            redirect_delay: self
                .redirect_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.redirect_delay),
        }
    }
}

/// Delays of the reset sequence, tunable per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimings {
    /// Wait before the session query when the link carries `type=recovery`.
    pub verify_grace: Duration,
    /// Wait for the `USER_UPDATED` notification before completing anyway.
    pub fallback_redirect: Duration,
    /// How long the success screen stays up before navigating away.
    pub redirect_delay: Duration,
}

impl Default for ResetTimings {
    fn default() -> Self {
        Self {
            verify_grace: Duration::from_millis(150),
            fallback_redirect: Duration::from_millis(500),
            redirect_delay: Duration::from_millis(2000),
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn lookup(obj: &JsValue, keys: &[&str]) -> Option<JsValue> {
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(obj, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
    }

    fn string_key(obj: &JsValue, keys: &[&str]) -> Option<String> {
        lookup(obj, keys).and_then(|v| v.as_string())
    }

    fn millis_key(obj: &JsValue, keys: &[&str]) -> Option<u64> {
        lookup(obj, keys)
            .and_then(|v| v.as_f64())
            .filter(|ms| *ms >= 0.0)
            .map(|ms| ms as u64)
    }

    // Expect optional global object:
    // window.__RESET_PORTAL_ENV = { AUTH_URL: "...", ANON_KEY: "..." }
    pub fn from_env_js() -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &"__RESET_PORTAL_ENV".into()).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        Some(RuntimeConfig {
            auth_url: string_key(&env, &["AUTH_URL", "auth_url"]),
            anon_key: string_key(&env, &["ANON_KEY", "anon_key"]),
            verify_grace_ms: millis_key(&env, &["VERIFY_GRACE_MS", "verify_grace_ms"]),
            fallback_redirect_ms: millis_key(
                &env,
                &["FALLBACK_REDIRECT_MS", "fallback_redirect_ms"],
            ),
            redirect_delay_ms: millis_key(&env, &["REDIRECT_DELAY_MS", "redirect_delay_ms"]),
        })
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

#[cfg(target_arch = "wasm32")]
async fn load() -> RuntimeConfig {
    if let Some(cfg) = browser::from_env_js() {
        return cfg;
    }
    if let Some(cfg) = browser::fetch_config_json().await {
        return cfg;
    }
    log::warn!(
        "no runtime config found, falling back to {}",
        DEFAULT_AUTH_URL
    );
    RuntimeConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    cache(load().await)
}

/// Timings from the loaded config, defaults before `init` finished.
pub fn current_timings() -> ResetTimings {
    RUNTIME_CONFIG
        .get()
        .map(RuntimeConfig::timings)
        .unwrap_or_default()
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    log::info!("auth backend: {}", cfg.auth_url());
}

use crate::api::Session;
use web_sys::{Storage, Window};

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const SESSION_KEY: &str = "reset-portal.auth.session";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn load_session() -> Option<Session> {
    let raw = local_storage().ok()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding unreadable stored session: {}", err);
            clear_session();
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_session(session: &Session) {
    let Ok(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(session) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_session() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

// Host builds (tests, SSR) have no browser storage.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_session() -> Option<Session> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_session(_session: &Session) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_session() {}

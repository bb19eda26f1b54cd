//! Thin wrappers over `window.location` / `window.history`. On host builds
//! they read nothing and do nothing.

#[cfg(target_arch = "wasm32")]
pub fn current_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.is_empty() {
        None
    } else {
        Some(hash)
    }
}

/// Removes the fragment from the address bar without reloading.
#[cfg(target_arch = "wasm32")]
pub fn clear_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(path), Ok(search)) = (location.pathname(), location.search()) else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, search)),
        );
    }
}

/// Full-page navigation.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            log::error!("navigation to {} failed", url);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_hash() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_hash() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(url: &str) {
    log::info!("redirect requested to {}", url);
}

mod api;
pub mod apps;
mod components;
pub mod config;
mod pages;
mod router;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use router::{app_root, mount_app};

/// Installs the panic hook and logger, resolves runtime config, then mounts
/// the router. Timings are read at mount, so config must be loaded first.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    web_sys::console::log_1(&"Starting password reset portal".into());

    // window.__RESET_PORTAL_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        mount_app();
    });
}

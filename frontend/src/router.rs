use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::AuthClient,
    pages::{InvalidLinkPage, ResetPasswordPage},
};

pub const RESET_PASSWORD_PATH: &str = "/reset-password";
pub const INVALID_LINK_PATH: &str = "/invalid-link";

pub const ROUTE_PATHS: &[&str] = &[RESET_PASSWORD_PATH, INVALID_LINK_PATH];

/// Every path outside [`ROUTE_PATHS`] is replaced with this one.
pub const FALLBACK_PATH: &str = INVALID_LINK_PATH;

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthClient::new());
    view! {
        <Router>
            <Routes>
                <Route path=RESET_PASSWORD_PATH view=ResetPasswordPage/>
                <Route path=INVALID_LINK_PATH view=InvalidLinkPage/>
                <Route path="/*any" view=UnknownRoute/>
            </Routes>
        </Router>
    }
}

#[component]
fn UnknownRoute() -> impl IntoView {
    log::warn!("unknown route, redirecting to {}", FALLBACK_PATH);
    view! {
        <Redirect
            path=FALLBACK_PATH
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_at;

    fn render_path(path: &str) -> String {
        render_at(path, app_root)
    }

    #[test]
    fn invalid_link_route_renders_static_page() {
        let html = render_path("/invalid-link");
        assert!(html.contains("This password reset link is invalid or has expired."));
    }

    #[test]
    fn reset_route_starts_in_verification() {
        let html = render_path("/reset-password?app=fccCRM");
        assert!(html.contains("Verifying password reset link..."));
        assert!(!html.contains("Reset Your Password"));
    }
}

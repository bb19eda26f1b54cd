use leptos::*;
use leptos_router::{RouterIntegrationContext, ServerIntegration};

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` as if the browser were at `path` (path plus query).
pub fn render_at<F, N>(path: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let url = format!("http://localhost{}", path);
    render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
        view()
    })
}

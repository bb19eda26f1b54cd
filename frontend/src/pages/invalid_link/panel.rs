use crate::{apps::GENERIC_APP_NAME, components::layout::Shell};
use leptos::*;

/// Link lifetime configured on the auth backend, in minutes.
pub const LINK_LIFETIME_MINUTES: u32 = 60;

fn recovery_steps() -> [String; 3] {
    [
        format!("Go back to your {} application", GENERIC_APP_NAME),
        "Click \"Forgot Password?\" on the login page".to_string(),
        "Enter your email to receive a new reset link".to_string(),
    ]
}

#[component]
pub fn InvalidLinkPanel() -> impl IntoView {
    view! {
        <Shell>
            <div class="text-center space-y-4">
                <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-status-warning-bg">
                    <i class="fas fa-link text-status-warning-text"></i>
                </div>
                <h2 class="text-2xl font-bold text-fg">"Invalid Link"</h2>
                <p class="text-sm text-fg-muted">
                    "This password reset link is invalid or has expired."
                </p>
            </div>
            <div class="mt-6 rounded-md bg-surface-muted p-4">
                <h3 class="text-sm font-medium text-fg">"What to do:"</h3>
                <ol class="mt-2 list-decimal list-inside space-y-1 text-sm text-fg-muted">
                    {recovery_steps()
                        .into_iter()
                        .map(|step| view! { <li>{step}</li> })
                        .collect_view()}
                </ol>
            </div>
            <p class="mt-4 text-center text-xs text-fg-muted">
                {format!(
                    "Password reset links expire after {} minutes.",
                    LINK_LIFETIME_MINUTES,
                )}
            </p>
        </Shell>
    }
}

use crate::components::layout::LoadingSpinner;
use leptos::*;

#[component]
pub fn VerifyingCard() -> impl IntoView {
    view! {
        <div class="text-center">
            <LoadingSpinner/>
            <p class="text-sm text-fg-muted">"Verifying password reset link..."</p>
        </div>
    }
}

#[component]
pub fn InvalidLinkCard(message: String, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-center space-y-4">
            <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-status-error-bg">
                <i class="fas fa-exclamation-triangle text-status-error-text"></i>
            </div>
            <h2 class="text-2xl font-bold text-fg">"Invalid Reset Link"</h2>
            <p class="text-sm text-fg-muted">"This link is invalid or has expired."</p>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                <p class="text-sm">{message}</p>
            </div>
            <button
                type="button"
                class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                on:click=move |_| on_back.call(())
            >
                "Back"
            </button>
        </div>
    }
}

#[component]
pub fn SuccessCard(app_name: String) -> impl IntoView {
    view! {
        <div class="text-center space-y-4">
            <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-status-success-bg">
                <svg class="h-6 w-6 text-status-success-text" viewBox="0 0 20 20" fill="currentColor">
                    <path
                        fill-rule="evenodd"
                        d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                        clip-rule="evenodd"
                    ></path>
                </svg>
            </div>
            <h2 class="text-2xl font-bold text-fg">"Password Reset!"</h2>
            <p class="text-sm text-fg-muted">"Your password has been updated successfully."</p>
            <p class="text-sm text-fg-muted">
                {format!(
                    "Redirecting you back to {} to log in with your new password...",
                    app_name,
                )}
            </p>
            <LoadingSpinner/>
        </div>
    }
}

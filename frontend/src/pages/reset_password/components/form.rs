use crate::pages::reset_password::utils::{PasswordStrength, ResetFormState};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 pr-16 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";

#[component]
pub fn PasswordRequirements(#[prop(into)] strength: Signal<PasswordStrength>) -> impl IntoView {
    view! {
        <div class="rounded-md bg-surface-muted p-3">
            <p class="text-xs font-medium text-fg">"Password Requirements:"</p>
            <ul class="mt-1 space-y-1">
                {move || {
                    strength
                        .get()
                        .requirements()
                        .into_iter()
                        .map(|(met, label)| {
                            let class = if met {
                                "text-xs text-status-success-text"
                            } else {
                                "text-xs text-fg-muted"
                            };
                            view! {
                                <li class=class>
                                    {if met { "✓ " } else { "○ " }}
                                    {label}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn MatchHint(form: ResetFormState) -> impl IntoView {
    let confirmation = form.confirmation_signal();
    move || {
        if confirmation.with(|value| value.is_empty()) {
            view! {}.into_view()
        } else if form.matches() {
            view! { <p class="mt-1 text-xs text-status-success-text">"Passwords match"</p> }
                .into_view()
        } else {
            view! { <p class="mt-1 text-xs text-status-error-text">"Passwords do not match"</p> }
                .into_view()
        }
    }
}

#[component]
pub fn ResetForm(
    app_name: String,
    form: ResetFormState,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let password = form.password_signal();
    let confirmation = form.confirmation_signal();
    let strength = Signal::derive(move || form.strength());
    let disabled = move || submitting.get() || !form.can_submit();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-fg">"Reset Your Password"</h2>
                <p class="mt-2 text-sm text-fg-muted">
                    {format!("Choose a new password for your {} account.", app_name)}
                </p>
            </div>
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="new-password" class="block text-sm font-medium text-fg">
                        "New Password"
                    </label>
                    <div class="relative mt-1">
                        <input
                            id="new-password"
                            name="new-password"
                            type=move || form.input_type()
                            autocomplete="new-password"
                            required
                            class=INPUT_CLASS
                            placeholder="Enter new password"
                            prop:value=password
                            disabled=move || submitting.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 px-3 text-xs text-fg-muted hover:text-fg"
                            on:click=move |_| form.toggle_visibility()
                        >
                            {move || if form.show_password_signal().get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>
                <div>
                    <label for="confirm-password" class="block text-sm font-medium text-fg">
                        "Confirm New Password"
                    </label>
                    <input
                        id="confirm-password"
                        name="confirm-password"
                        type=move || form.input_type()
                        autocomplete="new-password"
                        required
                        class=INPUT_CLASS
                        placeholder="Confirm new password"
                        prop:value=confirmation
                        disabled=move || submitting.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <MatchHint form=form/>
                </div>
                {move || {
                    (!password.with(String::is_empty))
                        .then(|| view! { <PasswordRequirements strength=strength/> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                                    <p class="text-sm">{message}</p>
                                </div>
                            }
                        })
                }}
                <button
                    type="submit"
                    disabled=disabled
                    class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || {
                        if submitting.get() { "Resetting Password..." } else { "Reset Password" }
                    }}
                </button>
            </form>
        </div>
    }
}

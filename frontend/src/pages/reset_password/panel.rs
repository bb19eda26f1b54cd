use super::{
    components::{
        form::ResetForm,
        status::{InvalidLinkCard, SuccessCard, VerifyingCard},
    },
    types::SessionCheck,
    view_model::{use_reset_password_view_model, ResetPasswordViewModel},
};
use crate::{components::layout::Shell, router::INVALID_LINK_PATH};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let navigate = use_navigate();
    let on_back = Callback::new(move |_| navigate(INVALID_LINK_PATH, NavigateOptions::default()));
    view! { <ResetPasswordContent vm=vm on_back=on_back/> }
}

/// Picks the card for the current verification and submission state.
#[component]
pub fn ResetPasswordContent(vm: ResetPasswordViewModel, on_back: Callback<()>) -> impl IntoView {
    let session_check = vm.session_check;
    let submission = vm.submission;
    let app_name = vm.app_name();
    let error = vm.error();
    let submitting = vm.submitting();
    let form = vm.form;
    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| vm.submit())
    };

    let body = move || match session_check.get() {
        SessionCheck::Pending => view! { <VerifyingCard/> }.into_view(),
        SessionCheck::Invalid(message) => {
            view! { <InvalidLinkCard message=message on_back=on_back/> }.into_view()
        }
        SessionCheck::Valid if submission.with(|state| state.is_succeeded()) => {
            view! { <SuccessCard app_name=app_name.clone()/> }.into_view()
        }
        SessionCheck::Valid => view! {
            <ResetForm
                app_name=app_name.clone()
                form=form
                error=error
                submitting=submitting
                on_submit=on_submit
            />
        }
        .into_view(),
    };

    view! { <Shell>{body}</Shell> }
}

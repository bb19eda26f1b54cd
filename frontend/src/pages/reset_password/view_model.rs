use super::{
    controller::{
        verify_recovery_session, BrowserNavigator, BrowserTimer, LocalSpawner, ResetController,
    },
    repository::ResetPasswordRepository,
    types::{SessionCheck, SubmissionState},
    utils::{ResetFormState, SubmitError},
};
use crate::{api::AuthClient, apps::ResetContext, config, utils::location};
use leptos::*;
use leptos_router::use_query_map;
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub context: ResetContext,
    pub session_check: RwSignal<SessionCheck>,
    pub form: ResetFormState,
    pub submission: RwSignal<SubmissionState>,
    pub submit_action: Action<(String, String), Result<(), SubmitError>>,
}

impl ResetPasswordViewModel {
    pub fn app_name(&self) -> String {
        self.context.app_name().to_string()
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let submission = self.submission;
        Signal::derive(move || submission.with(|state| state.error().map(str::to_string)))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let submission = self.submission;
        Signal::derive(move || submission.with(SubmissionState::is_submitting))
    }

    pub fn submit(&self) {
        self.submit_action.dispatch(self.form.values());
    }
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let client = use_context::<AuthClient>().unwrap_or_else(AuthClient::new);
    let repository = ResetPasswordRepository::new_with_backend(Rc::new(client));
    let query = use_query_map();
    let context = query.with_untracked(|params| {
        ResetContext::new(params.get("app").cloned(), params.get("returnUrl").cloned())
    });
    let timings = config::current_timings();
    // Read before the client consumes and clears it.
    let fragment = location::current_hash();

    let controller = ResetController::new(
        repository.clone(),
        Rc::new(BrowserTimer),
        Rc::new(BrowserNavigator),
        Rc::new(LocalSpawner),
        timings,
        context.login_url(),
    );
    let subscription = controller.listen();
    on_cleanup(move || subscription.unsubscribe());

    let session_check = create_rw_signal(SessionCheck::Pending);
    create_effect(move |_| {
        let repository = repository.clone();
        let fragment = fragment.clone();
        spawn_local(async move {
            let check = verify_recovery_session(
                &repository,
                &BrowserTimer,
                fragment.as_deref(),
                timings.verify_grace,
            )
            .await;
            session_check.set(check);
        });
    });

    let submission = controller.state();
    let submit_action = create_action(move |values: &(String, String)| {
        let controller = controller.clone();
        let (password, confirmation) = values.clone();
        async move { controller.submit(password, confirmation).await }
    });

    ResetPasswordViewModel {
        context,
        session_check,
        form: ResetFormState::new(),
        submission,
        submit_action,
    }
}

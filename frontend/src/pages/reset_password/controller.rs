//! Recovery-session verification and the exactly-once completion sequence.
//!
//! Two producers can report a successful password change: the backend's
//! `USER_UPDATED` notification and a fallback timer started after the update
//! call returns. Both go through [`RedirectLatch::try_acquire`]; only the
//! winner signs out and navigates.

use super::{
    repository::ResetPasswordRepository,
    types::{SessionCheck, SubmissionState, INVALID_LINK_MESSAGE, VERIFY_FAILED_MESSAGE},
    utils::{validate_new_password, SubmitError},
};
use crate::{
    api::{fragment::is_recovery_fragment, AuthChangeEvent, Subscription},
    apps::success_redirect_url,
    config::ResetTimings,
    utils::location,
};
use async_trait::async_trait;
use leptos::*;
use std::{cell::Cell, future::Future, pin::Pin, rc::Rc, time::Duration};

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

pub trait Navigator {
    fn navigate(&self, url: &str);
}

pub trait Spawner {
    fn spawn(&self, task: Pin<Box<dyn Future<Output = ()>>>);
}

pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        location::redirect_to(url);
    }
}

pub struct LocalSpawner;

impl Spawner for LocalSpawner {
    fn spawn(&self, task: Pin<Box<dyn Future<Output = ()>>>) {
        spawn_local(task);
    }
}

/// Single-fire flag. The check and the set happen in one `Cell::replace`, so
/// no await can interleave between them.
#[derive(Clone, Default)]
pub struct RedirectLatch(Rc<Cell<bool>>);

impl RedirectLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true for exactly one caller.
    pub fn try_acquire(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn is_held(&self) -> bool {
        self.0.get()
    }
}

/// Decides once, at page load, whether the link opened a live recovery
/// session.
pub async fn verify_recovery_session(
    repo: &ResetPasswordRepository,
    timer: &dyn Timer,
    fragment: Option<&str>,
    grace: Duration,
) -> SessionCheck {
    if is_recovery_fragment(fragment) {
        // Give the client time to exchange the fragment tokens.
        timer.sleep(grace).await;
    }
    match repo.current_session().await {
        Ok(Some(_)) => SessionCheck::Valid,
        Ok(None) => {
            log::warn!("no recovery session for reset link");
            SessionCheck::Invalid(INVALID_LINK_MESSAGE.to_string())
        }
        Err(err) if err.is_transport() => {
            log::error!("reset link verification failed: {}", err);
            SessionCheck::Invalid(VERIFY_FAILED_MESSAGE.to_string())
        }
        Err(err) => {
            log::warn!("reset link rejected ({}): {}", err.code, err);
            SessionCheck::Invalid(INVALID_LINK_MESSAGE.to_string())
        }
    }
}

#[derive(Clone)]
pub struct ResetController {
    repo: ResetPasswordRepository,
    timer: Rc<dyn Timer>,
    navigator: Rc<dyn Navigator>,
    spawner: Rc<dyn Spawner>,
    timings: ResetTimings,
    login_url: String,
    latch: RedirectLatch,
    update_in_flight: Rc<Cell<bool>>,
    state: RwSignal<SubmissionState>,
}

impl ResetController {
    pub fn new(
        repo: ResetPasswordRepository,
        timer: Rc<dyn Timer>,
        navigator: Rc<dyn Navigator>,
        spawner: Rc<dyn Spawner>,
        timings: ResetTimings,
        login_url: String,
    ) -> Self {
        Self {
            repo,
            timer,
            navigator,
            spawner,
            timings,
            login_url,
            latch: RedirectLatch::new(),
            update_in_flight: Rc::new(Cell::new(false)),
            state: create_rw_signal(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> RwSignal<SubmissionState> {
        self.state
    }

    pub fn latch(&self) -> &RedirectLatch {
        &self.latch
    }

    pub fn redirect_target(&self) -> String {
        success_redirect_url(&self.login_url)
    }

    /// Registers the notification producer. The returned subscription must be
    /// released when the page goes away.
    pub fn listen(&self) -> Subscription {
        let controller = self.clone();
        self.repo
            .subscribe(Rc::new(move |event: AuthChangeEvent| {
                controller.on_auth_event(event)
            }))
    }

    pub fn on_auth_event(&self, event: AuthChangeEvent) {
        if event != AuthChangeEvent::UserUpdated || !self.update_in_flight.get() {
            return;
        }
        if self.latch.try_acquire() {
            log::info!("password update confirmed by auth notification");
            self.state.set(SubmissionState::Succeeded);
            let controller = self.clone();
            self.spawner
                .spawn(Box::pin(async move { controller.finish().await }));
        }
    }

    pub async fn submit(&self, password: String, confirmation: String) -> Result<(), SubmitError> {
        if !self.state.get_untracked().accepts_submit() {
            return Ok(());
        }
        if let Err(err) = validate_new_password(&password, &confirmation) {
            self.state.set(SubmissionState::Failed(err.to_string()));
            return Err(err);
        }

        self.state.set(SubmissionState::Submitting);
        self.update_in_flight.set(true);
        let result = self.repo.update_password(&password).await;

        // The notification may already have won and started signing out.
        if self.latch.is_held() {
            return Ok(());
        }

        if let Err(err) = result {
            self.update_in_flight.set(false);
            let err = SubmitError::Backend(err);
            log::warn!("password update rejected: {}", err);
            self.state.set(SubmissionState::Failed(err.to_string()));
            return Err(err);
        }

        self.timer.sleep(self.timings.fallback_redirect).await;
        if self.latch.try_acquire() {
            log::info!("password updated, completing without auth notification");
            self.state.set(SubmissionState::Succeeded);
            self.finish().await;
        }
        Ok(())
    }

    /// Sign out, keep the success screen up, then leave for the login page.
    async fn finish(&self) {
        if let Err(err) = self.repo.sign_out().await {
            log::warn!("sign-out after password reset failed: {}", err);
        }
        self.timer.sleep(self.timings.redirect_delay).await;
        let target = self.redirect_target();
        log::info!("redirecting to {}", target);
        self.navigator.navigate(&target);
    }
}

#[cfg(test)]
mod tests {
    use super::RedirectLatch;

    #[test]
    fn latch_is_acquired_once() {
        let latch = RedirectLatch::new();
        assert!(!latch.is_held());
        assert!(latch.try_acquire());
        assert!(latch.is_held());
        assert!(!latch.try_acquire());
        assert!(!latch.clone().try_acquire());
    }
}

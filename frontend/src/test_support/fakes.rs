//! In-memory stand-ins for the auth backend and browser effects.

use super::helpers::recovery_session;
use crate::api::{
    ApiError, AuthBackend, AuthChangeEvent, AuthEvents, AuthListener, AuthUser, Session,
    Subscription,
};
use crate::pages::reset_password::controller::{Navigator, Spawner, Timer};
use async_trait::async_trait;
use futures::executor::block_on;
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    future::Future,
    pin::Pin,
    time::Duration,
};

#[derive(Default)]
pub struct FakeBackend {
    session: RefCell<Option<Session>>,
    session_error: RefCell<Option<ApiError>>,
    update_error: RefCell<Option<ApiError>>,
    notify_on_update: Cell<bool>,
    sign_out_fails: Cell<bool>,
    session_queries: Cell<usize>,
    updated_passwords: RefCell<Vec<String>>,
    sign_out_calls: Cell<usize>,
    events: AuthEvents,
}

impl FakeBackend {
    pub fn with_session() -> Self {
        let backend = Self::default();
        *backend.session.borrow_mut() = Some(recovery_session());
        backend
    }

    pub fn without_session() -> Self {
        Self::default()
    }

    pub fn fail_session_with(&self, error: ApiError) {
        *self.session_error.borrow_mut() = Some(error);
    }

    pub fn fail_update_with(&self, error: ApiError) {
        *self.update_error.borrow_mut() = Some(error);
    }

    pub fn clear_update_failure(&self) {
        self.update_error.borrow_mut().take();
    }

    /// Emit `USER_UPDATED` from inside the update call, before it returns.
    pub fn notify_on_update(&self, enabled: bool) {
        self.notify_on_update.set(enabled);
    }

    pub fn fail_sign_out(&self, enabled: bool) {
        self.sign_out_fails.set(enabled);
    }

    pub fn emit(&self, event: AuthChangeEvent) {
        self.events.emit(event);
    }

    pub fn session_queries(&self) -> usize {
        self.session_queries.get()
    }

    pub fn update_calls(&self) -> usize {
        self.updated_passwords.borrow().len()
    }

    pub fn updated_passwords(&self) -> Vec<String> {
        self.updated_passwords.borrow().clone()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.get()
    }

    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn get_session(&self) -> Result<Option<Session>, ApiError> {
        self.session_queries.set(self.session_queries.get() + 1);
        if let Some(err) = self.session_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.session.borrow().clone())
    }

    async fn update_user_password(&self, password: &str) -> Result<AuthUser, ApiError> {
        self.updated_passwords.borrow_mut().push(password.to_string());
        if let Some(err) = self.update_error.borrow().clone() {
            return Err(err);
        }
        if self.session.borrow().is_none() {
            return Err(ApiError::session_missing());
        }
        if self.notify_on_update.get() {
            self.events.emit(AuthChangeEvent::UserUpdated);
        }
        Ok(super::helpers::recovery_user())
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        self.session.borrow_mut().take();
        self.events.emit(AuthChangeEvent::SignedOut);
        if self.sign_out_fails.get() {
            return Err(ApiError::request_failed("Request failed: offline"));
        }
        Ok(())
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        self.events.subscribe(listener)
    }
}

type SleepHook = Box<dyn FnOnce()>;

/// Completes every sleep immediately and remembers the requested durations.
#[derive(Default)]
pub struct RecordingTimer {
    sleeps: RefCell<Vec<Duration>>,
    on_first_sleep: RefCell<Option<SleepHook>>,
}

impl RecordingTimer {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    /// Runs `hook` while the first sleep is pending.
    pub fn on_first_sleep(&self, hook: impl FnOnce() + 'static) {
        *self.on_first_sleep.borrow_mut() = Some(Box::new(hook));
    }
}

#[async_trait(?Send)]
impl Timer for RecordingTimer {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        let hook = self.on_first_sleep.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_string());
    }
}

type Task = Pin<Box<dyn Future<Output = ()>>>;

/// Holds spawned tasks until the test drains them.
#[derive(Default)]
pub struct QueuedSpawner {
    queue: RefCell<VecDeque<Task>>,
    spawned: Cell<usize>,
}

impl QueuedSpawner {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn spawned(&self) -> usize {
        self.spawned.get()
    }

    pub fn run_all(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(task) => block_on(task),
                None => break,
            }
        }
    }
}

impl Spawner for QueuedSpawner {
    fn spawn(&self, task: Task) {
        self.spawned.set(self.spawned.get() + 1);
        self.queue.borrow_mut().push_back(task);
    }
}

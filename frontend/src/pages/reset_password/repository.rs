use crate::api::{ApiError, AuthBackend, AuthListener, AuthUser, Session, Subscription};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    backend: Rc<dyn AuthBackend>,
}

impl ResetPasswordRepository {
    pub fn new_with_backend(backend: Rc<dyn AuthBackend>) -> Self {
        Self { backend }
    }

    pub async fn current_session(&self) -> Result<Option<Session>, ApiError> {
        self.backend.get_session().await
    }

    pub async fn update_password(&self, new_password: &str) -> Result<AuthUser, ApiError> {
        self.backend.update_user_password(new_password).await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.backend.sign_out().await
    }

    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        self.backend.on_auth_state_change(listener)
    }
}

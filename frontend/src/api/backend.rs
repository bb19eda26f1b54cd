use super::{
    events::{AuthListener, Subscription},
    types::{ApiError, AuthUser, Session},
};
use async_trait::async_trait;

/// The capability surface of the authentication backend the portal relies on.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn get_session(&self) -> Result<Option<Session>, ApiError>;

    async fn update_user_password(&self, password: &str) -> Result<AuthUser, ApiError>;

    async fn sign_out(&self) -> Result<(), ApiError>;

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription;
}

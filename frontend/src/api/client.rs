use async_trait::async_trait;
use reqwest::{header, Client, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{
    backend::AuthBackend,
    events::{AuthEvents, AuthListener, Subscription},
    fragment::AuthFragment,
    types::*,
};
use crate::{
    config,
    utils::{location, storage as storage_utils},
};

/// Status and decoded body of a backend response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn into_result<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.is_success() {
            serde_json::from_value(self.body)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> ApiError {
        let body: BackendErrorBody = serde_json::from_value(self.body).unwrap_or_default();
        body.into_api_error(self.status)
    }
}

/// Client for a GoTrue-compatible auth REST API. Clones share the session and
/// the listener registry.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Option<String>,
    anon_key: Option<String>,
    session: Rc<RefCell<Option<Session>>>,
    pending_fragment: Rc<RefCell<Option<String>>>,
    initialized: Rc<Cell<bool>>,
    events: AuthEvents,
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthClient {
    /// Client configured from the runtime config, capturing the current URL
    /// fragment for the token exchange.
    pub fn new() -> Self {
        Self::build(None, location::current_hash())
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(Some(base_url.into()), None)
    }

    fn build(base_url: Option<String>, fragment: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            anon_key: None,
            session: Rc::new(RefCell::new(None)),
            pending_fragment: Rc::new(RefCell::new(fragment)),
            initialized: Rc::new(Cell::new(false)),
            events: AuthEvents::new(),
        }
    }

    pub fn with_anon_key(mut self, anon_key: impl Into<String>) -> Self {
        self.anon_key = Some(anon_key.into());
        self
    }

    pub fn with_fragment(self, fragment: impl Into<String>) -> Self {
        *self.pending_fragment.borrow_mut() = Some(fragment.into());
        self
    }

    async fn endpoint(&self) -> (String, Option<String>) {
        if let Some(base) = &self.base_url {
            return (base.trim_end_matches('/').to_string(), self.anon_key.clone());
        }
        let cfg = config::await_runtime_config().await;
        (cfg.auth_url(), cfg.anon_key())
    }

    fn request(
        &self,
        builder: reqwest::RequestBuilder,
        anon_key: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Request, ApiError> {
        let mut builder = builder.header(header::ACCEPT, "application/json");
        if let Some(key) = anon_key.map(str::trim).filter(|key| !key.is_empty()) {
            builder = builder.header("apikey", key);
        }
        if let Some(token) = access_token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))
    }

    async fn execute(&self, request: Request) -> Result<RawResponse, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = find_mock(request.url().as_str()) {
                return responder.respond(&request);
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        Ok(RawResponse { status, body })
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn store_session(&self, session: Option<Session>) {
        match &session {
            Some(session) => storage_utils::save_session(session),
            None => storage_utils::clear_session(),
        }
        *self.session.borrow_mut() = session;
    }

    async fn fetch_user(&self, access_token: &str) -> Result<AuthUser, ApiError> {
        let (base, anon_key) = self.endpoint().await;
        let request = self.request(
            self.client.get(format!("{}/user", base)),
            anon_key.as_deref(),
            Some(access_token),
        )?;
        self.execute(request).await?.into_result()
    }

    /// Consumes the captured URL fragment once, or restores a persisted
    /// session when the page was opened without one.
    async fn ensure_initialized(&self) -> Result<(), ApiError> {
        if self.initialized.replace(true) {
            return Ok(());
        }
        let raw = self.pending_fragment.borrow_mut().take();
        let fragment = raw.as_deref().map(AuthFragment::parse).unwrap_or_default();

        if fragment.has_error() {
            log::warn!(
                "auth link rejected by backend: {}",
                fragment
                    .error_description
                    .as_deref()
                    .or(fragment.error_code.as_deref())
                    .unwrap_or("unknown error")
            );
            location::clear_hash();
            return Ok(());
        }

        if let Some(mut session) = fragment.to_session(chrono::Utc::now().timestamp()) {
            let user = self.fetch_user(&session.access_token).await?;
            session.user = Some(user);
            self.store_session(Some(session));
            location::clear_hash();
            let event = if fragment.is_recovery() {
                AuthChangeEvent::PasswordRecovery
            } else {
                AuthChangeEvent::SignedIn
            };
            self.events.emit(event);
            return Ok(());
        }

        if let Some(session) = storage_utils::load_session() {
            if session.is_expired() {
                storage_utils::clear_session();
            } else {
                *self.session.borrow_mut() = Some(session);
            }
        }
        self.events.emit(AuthChangeEvent::InitialSession);
        Ok(())
    }

    pub async fn get_session(&self) -> Result<Option<Session>, ApiError> {
        self.ensure_initialized().await?;
        let session = self.current_session();
        match session {
            Some(session) if session.is_expired() => {
                self.store_session(None);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub async fn update_user_password(&self, password: &str) -> Result<AuthUser, ApiError> {
        let session = self.get_session().await?.ok_or_else(ApiError::session_missing)?;
        let (base, anon_key) = self.endpoint().await;
        let request = self.request(
            self.client
                .put(format!("{}/user", base))
                .json(&UpdatePasswordRequest {
                    password: password.to_string(),
                }),
            anon_key.as_deref(),
            Some(&session.access_token),
        )?;
        let user: AuthUser = self.execute(request).await?.into_result()?;

        self.store_session(Some(Session {
            user: Some(user.clone()),
            ..session
        }));
        self.events.emit(AuthChangeEvent::UserUpdated);
        Ok(user)
    }

    async fn revoke(&self, access_token: &str) -> Result<(), ApiError> {
        let (base, anon_key) = self.endpoint().await;
        let request = self.request(
            self.client.post(format!("{}/logout?scope=local", base)),
            anon_key.as_deref(),
            Some(access_token),
        )?;
        let response = self.execute(request).await?;
        // 401/404: the token is already revoked on the backend side.
        if response.is_success() || response.status == 401 || response.status == 404 {
            Ok(())
        } else {
            Err(response.into_error())
        }
    }

    /// Ends the session locally even when the backend call fails.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let result = match self.current_session() {
            Some(session) => self.revoke(&session.access_token).await,
            None => Ok(()),
        };
        self.store_session(None);
        self.events.emit(AuthChangeEvent::SignedOut);
        result
    }

    pub fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        self.events.subscribe(listener)
    }
}

#[async_trait(?Send)]
impl AuthBackend for AuthClient {
    async fn get_session(&self) -> Result<Option<Session>, ApiError> {
        AuthClient::get_session(self).await
    }

    async fn update_user_password(&self, password: &str) -> Result<AuthUser, ApiError> {
        AuthClient::update_user_password(self, password).await
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        AuthClient::sign_out(self).await
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        AuthClient::on_auth_state_change(self, listener)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) trait TestResponder {
    fn respond(&self, request: &Request) -> Result<RawResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
thread_local! {
    static MOCKS: RefCell<Vec<(String, std::sync::Arc<dyn TestResponder>)>> =
        RefCell::new(Vec::new());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    MOCKS.with(|mocks| {
        let mut mocks = mocks.borrow_mut();
        mocks.retain(|(base, _)| *base != base_url);
        mocks.push((base_url, responder));
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn find_mock(url: &str) -> Option<std::sync::Arc<dyn TestResponder>> {
    MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    })
}

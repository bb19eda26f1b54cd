use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp (seconds).
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at
            .map(|expires_at| expires_at <= now_unix)
            .unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    PasswordRecovery,
    SignedIn,
    UserUpdated,
    SignedOut,
}

impl AuthChangeEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthChangeEvent::InitialSession => "INITIAL_SESSION",
            AuthChangeEvent::PasswordRecovery => "PASSWORD_RECOVERY",
            AuthChangeEvent::SignedIn => "SIGNED_IN",
            AuthChangeEvent::UserUpdated => "USER_UPDATED",
            AuthChangeEvent::SignedOut => "SIGNED_OUT",
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

/// Error payload as returned by the auth backend. Different backend versions
/// use different field names for the message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
}

impl BackendErrorBody {
    pub fn into_api_error(self, status: u16) -> ApiError {
        let code = self
            .error_code
            .clone()
            .filter(|code| !code.trim().is_empty())
            .map(|code| code.to_ascii_uppercase())
            .unwrap_or_else(|| format!("HTTP_{}", status));
        let error = self
            .msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .unwrap_or_default();
        ApiError {
            error,
            code,
            details: Some(serde_json::json!({ "status": status })),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn session_missing() -> Self {
        Self {
            error: "Auth session missing!".to_string(),
            code: "AUTH_SESSION_MISSING".to_string(),
            details: None,
        }
    }

    /// True when the request never produced a backend answer.
    pub fn is_transport(&self) -> bool {
        self.code == "REQUEST_FAILED" || self.code == "UNKNOWN"
    }
}

use super::types::Session;

/// Parameters the auth backend appends to the reset link as a URL fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFragment {
    pub kind: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub expires_at: Option<i64>,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub error_description: Option<String>,
}

impl AuthFragment {
    /// Accepts the fragment with or without its leading `#`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.strip_prefix('#').unwrap_or(raw);
        let mut fragment = AuthFragment::default();
        for (key, value) in url::form_urlencoded::parse(trimmed.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "type" => fragment.kind = Some(value),
                "access_token" => fragment.access_token = Some(value),
                "refresh_token" => fragment.refresh_token = Some(value),
                "token_type" => fragment.token_type = Some(value),
                "expires_in" => fragment.expires_in = value.parse().ok(),
                "expires_at" => fragment.expires_at = value.parse().ok(),
                "error" => fragment.error = Some(value),
                "error_code" => fragment.error_code = Some(value),
                "error_description" => fragment.error_description = Some(value),
                _ => {}
            }
        }
        fragment
    }

    pub fn is_recovery(&self) -> bool {
        self.kind.as_deref() == Some("recovery")
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some() || self.error_description.is_some()
    }

    pub fn has_tokens(&self) -> bool {
        self.access_token
            .as_deref()
            .map(|token| !token.is_empty())
            .unwrap_or(false)
    }

    /// Builds a session from the fragment tokens. `now_unix` fills in
    /// `expires_at` when only `expires_in` was sent.
    pub fn to_session(&self, now_unix: i64) -> Option<Session> {
        if self.has_error() || !self.has_tokens() {
            return None;
        }
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_unix + secs));
        Some(Session {
            access_token: self.access_token.clone()?,
            refresh_token: self.refresh_token.clone(),
            token_type: self
                .token_type
                .clone()
                .unwrap_or_else(|| "bearer".to_string()),
            expires_in: self.expires_in,
            expires_at,
            user: None,
        })
    }
}

/// True when the raw fragment announces a password-recovery flow.
pub fn is_recovery_fragment(raw: Option<&str>) -> bool {
    raw.map(|raw| AuthFragment::parse(raw).is_recovery())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOVERY: &str = "#access_token=abc.def&expires_at=1700003600&expires_in=3600&refresh_token=r1&token_type=bearer&type=recovery";

    #[test]
    fn parses_recovery_fragment() {
        let fragment = AuthFragment::parse(RECOVERY);
        assert!(fragment.is_recovery());
        assert!(fragment.has_tokens());
        assert!(!fragment.has_error());
        assert_eq!(fragment.access_token.as_deref(), Some("abc.def"));
        assert_eq!(fragment.expires_at, Some(1_700_003_600));
    }

    #[test]
    fn parses_without_leading_hash() {
        let fragment = AuthFragment::parse("type=recovery");
        assert!(fragment.is_recovery());
        assert!(!fragment.has_tokens());
    }

    #[test]
    fn decodes_error_description() {
        let fragment = AuthFragment::parse(
            "#error=access_denied&error_code=otp_expired&error_description=Email+link+is+invalid+or+has+expired",
        );
        assert!(fragment.has_error());
        assert_eq!(fragment.error_code.as_deref(), Some("otp_expired"));
        assert_eq!(
            fragment.error_description.as_deref(),
            Some("Email link is invalid or has expired")
        );
        assert!(fragment.to_session(0).is_none());
    }

    #[test]
    fn to_session_derives_expiry_from_expires_in() {
        let fragment = AuthFragment::parse("#access_token=tok&expires_in=60&type=recovery");
        let session = fragment.to_session(1_000).expect("session");
        assert_eq!(session.expires_at, Some(1_060));
        assert_eq!(session.token_type, "bearer");
    }

    #[test]
    fn recovery_detection_handles_other_types() {
        assert!(is_recovery_fragment(Some(RECOVERY)));
        assert!(!is_recovery_fragment(Some("#type=signup")));
        assert!(!is_recovery_fragment(Some("")));
        assert!(!is_recovery_fragment(None));
    }
}

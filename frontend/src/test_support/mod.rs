#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod fakes;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AuthUser, Session};

    pub fn recovery_user() -> AuthUser {
        AuthUser {
            id: "u-recovery".into(),
            email: Some("member@example.com".into()),
        }
    }

    pub fn recovery_session() -> Session {
        Session {
            access_token: "recovery-token".into(),
            refresh_token: Some("refresh-token".into()),
            token_type: "bearer".into(),
            expires_in: Some(3600),
            expires_at: None,
            user: Some(recovery_user()),
        }
    }
}

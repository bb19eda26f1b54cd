use crate::api::ApiError;
use leptos::*;

pub const MIN_PASSWORD_LENGTH: usize = 8;

const SAME_PASSWORD_MESSAGE: &str = "New password must be different from your current password.";
const GENERIC_RESET_FAILURE: &str = "Failed to reset password.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub has_min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn is_strong(&self) -> bool {
        self.has_min_length && self.has_upper && self.has_lower && self.has_digit
    }

    /// Checklist rows in display order.
    pub fn requirements(&self) -> [(bool, &'static str); 4] {
        [
            (self.has_min_length, "At least 8 characters"),
            (self.has_upper, "One uppercase letter"),
            (self.has_lower, "One lowercase letter"),
            (self.has_digit, "One number"),
        ]
    }
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !password.is_empty() && password == confirmation
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password does not meet strength requirements.")]
    WeakPassword,
    #[error("{}", friendly_update_error(.0))]
    Backend(ApiError),
}

/// Runs before any backend call. Mismatch is reported ahead of strength.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), SubmitError> {
    if !passwords_match(password, confirmation) {
        return Err(SubmitError::PasswordMismatch);
    }
    if !PasswordStrength::evaluate(password).is_strong() {
        return Err(SubmitError::WeakPassword);
    }
    Ok(())
}

pub fn friendly_update_error(error: &ApiError) -> String {
    if error.error.contains("should be different") || error.code == "SAME_PASSWORD" {
        return SAME_PASSWORD_MESSAGE.to_string();
    }
    if error.error.trim().is_empty() {
        GENERIC_RESET_FAILURE.to_string()
    } else {
        error.error.clone()
    }
}

#[derive(Clone, Copy)]
pub struct ResetFormState {
    password: RwSignal<String>,
    confirmation: RwSignal<String>,
    show_password: RwSignal<bool>,
}

impl Default for ResetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetFormState {
    pub fn new() -> Self {
        Self {
            password: create_rw_signal(String::new()),
            confirmation: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }

    pub fn password_signal(&self) -> RwSignal<String> {
        self.password
    }

    pub fn confirmation_signal(&self) -> RwSignal<String> {
        self.confirmation
    }

    pub fn show_password_signal(&self) -> RwSignal<bool> {
        self.show_password
    }

    pub fn toggle_visibility(&self) {
        self.show_password.update(|visible| *visible = !*visible);
    }

    pub fn strength(&self) -> PasswordStrength {
        self.password.with(|password| PasswordStrength::evaluate(password))
    }

    pub fn matches(&self) -> bool {
        self.password
            .with(|password| self.confirmation.with(|confirm| passwords_match(password, confirm)))
    }

    pub fn can_submit(&self) -> bool {
        self.matches() && self.strength().is_strong()
    }

    pub fn input_type(&self) -> &'static str {
        if self.show_password.get() {
            "text"
        } else {
            "password"
        }
    }

    pub fn values(&self) -> (String, String) {
        (
            self.password.get_untracked(),
            self.confirmation.get_untracked(),
        )
    }
}

pub const INVALID_LINK_MESSAGE: &str = "Invalid or expired password reset link.";
pub const VERIFY_FAILED_MESSAGE: &str = "Failed to verify password reset link.";

/// Outcome of the one-shot recovery session check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionCheck {
    #[default]
    Pending,
    Valid,
    Invalid(String),
}

impl SessionCheck {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionCheck::Pending)
    }

    pub fn invalid_reason(&self) -> Option<&str> {
        match self {
            SessionCheck::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionState::Succeeded)
    }

    /// Whether a new submission may start from this state.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_state_gates_resubmission() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Failed("x".into()).accepts_submit());
        assert!(!SubmissionState::Submitting.accepts_submit());
        assert!(!SubmissionState::Succeeded.accepts_submit());
    }

    #[test]
    fn accessors_expose_reasons() {
        assert_eq!(
            SessionCheck::Invalid(INVALID_LINK_MESSAGE.into()).invalid_reason(),
            Some(INVALID_LINK_MESSAGE)
        );
        assert_eq!(SessionCheck::Valid.invalid_reason(), None);
        assert!(SessionCheck::default().is_pending());
        assert_eq!(SubmissionState::Failed("nope".into()).error(), Some("nope"));
        assert_eq!(SubmissionState::Succeeded.error(), None);
    }
}

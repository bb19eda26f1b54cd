pub mod invalid_link;
pub mod reset_password;

pub use invalid_link::InvalidLinkPage;
pub use reset_password::ResetPasswordPage;

//! Page controllers

mod chat;
mod home;
mod login;
mod register;

pub use chat::{ChatPage, ModalKey, SendOutcome};
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;

use auth_client::{AuthError, AuthResponse, FieldErrors};

/// Result of submitting an auth form.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// The endpoint accepted the request.
    Succeeded(AuthResponse),
    /// The request was sent and failed. Already logged.
    Failed(AuthError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

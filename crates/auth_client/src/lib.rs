pub mod api;
pub mod client_trait;
pub mod error;
pub mod form;
pub mod models;
pub mod utils;

pub use api::client::AuthClient;
pub use chat_core::Config;
pub use client_trait::AuthApi;
pub use error::AuthError;
pub use form::{Field, FieldErrors, LoginForm, RegisterForm};
pub use models::{AuthResponse, FullName, LoginRequest, RegisterRequest};

use async_trait::async_trait;

use crate::error::AuthError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError>;
}

//! Auth Endpoints

use smart_menu_core::domain::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use super::{post_public, ApiError};

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    post_public("/auth/login", &body).await
}

pub async fn register(request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
    post_public("/auth/register", request).await
}

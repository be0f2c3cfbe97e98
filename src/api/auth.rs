//! Login / Signup Endpoints

use serde::Serialize;

use super::send_json;
use crate::error::ApiError;
use crate::models::SessionUser;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupPayload {
    pub username: String,
    pub user_name: String,
    pub email: String,
    /// Digits only
    pub phone_number: String,
    pub gender: String,
    /// YYYY-MM-DD
    pub birthday: String,
    pub password: String,
    pub user_type: String,
}

pub async fn login(payload: &LoginPayload) -> Result<SessionUser, ApiError> {
    let text = send_json("POST", "/login", payload, "Login failed").await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn signup(payload: &SignupPayload) -> Result<(), ApiError> {
    send_json("POST", "/api/signup", payload, "Failed to register").await.map(|_| ())
}

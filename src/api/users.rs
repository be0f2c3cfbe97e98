//! User Endpoints

use serde::Serialize;

use super::{delete, get_json, send_json};
use crate::error::ApiError;
use crate::models::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub user_name: String,
    pub email: String,
    pub username: String,
    pub gender: String,
    pub user_type: String,
    /// Only sent when the admin typed one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    get_json("/api/users", "Failed to load users").await
}

/// Users of one type, e.g. `Normal` for the patient dropdown.
pub async fn list_users_by_type(user_type: &str) -> Result<Vec<User>, ApiError> {
    let path = format!("/api/users?user_type={}", super::encode(user_type));
    let users: Vec<User> = get_json(&path, "Failed to load users").await?;
    Ok(users.into_iter().filter(|u| u.user_type == user_type).collect())
}

pub async fn create_user(payload: &UserPayload) -> Result<(), ApiError> {
    send_json("POST", "/api/users", payload, "Failed to add user").await.map(|_| ())
}

pub async fn update_user(id: u32, payload: &UserPayload) -> Result<(), ApiError> {
    send_json("PUT", &format!("/api/users/{}", id), payload, "Failed to update user")
        .await
        .map(|_| ())
}

pub async fn delete_user(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/users/{}", id), "Failed to delete user").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_omitted_when_absent() {
        let payload = UserPayload {
            user_name: "Mei".into(),
            email: "mei@clinic.my".into(),
            username: "mei".into(),
            gender: "Female".into(),
            user_type: "Normal".into(),
            password: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["user_type"], "Normal");
    }
}

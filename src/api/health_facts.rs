//! Health Fact Endpoints

use serde::Serialize;

use super::{delete, get_json, send_json};
use crate::error::ApiError;
use crate::models::HealthFact;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthFactPayload {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub is_featured: i32,
    pub is_active: i32,
}

pub async fn list_health_facts() -> Result<Vec<HealthFact>, ApiError> {
    get_json("/api/health-facts", "Failed to load health facts").await
}

pub async fn get_health_fact(id: u32) -> Result<HealthFact, ApiError> {
    get_json(&format!("/api/health-facts/{}", id), "Failed to load health fact details").await
}

pub async fn create_health_fact(payload: &HealthFactPayload) -> Result<(), ApiError> {
    send_json("POST", "/api/health-facts", payload, "Failed to add health fact")
        .await
        .map(|_| ())
}

pub async fn update_health_fact(id: u32, payload: &HealthFactPayload) -> Result<(), ApiError> {
    send_json("PUT", &format!("/api/health-facts/{}", id), payload, "Failed to update health fact")
        .await
        .map(|_| ())
}

pub async fn delete_health_fact(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/health-facts/{}", id), "Failed to delete health fact").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_category_is_serialized() {
        let payload = HealthFactPayload {
            title: "Sleep".into(),
            content: "Seven hours".into(),
            category: None,
            is_featured: 1,
            is_active: 1,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""category":null"#));
    }
}

//! Checkup Type Endpoints
//!
//! Create and update go out as multipart so an image can ride along.

use super::{build_form_data, delete, get_json, send_multipart};
use crate::error::ApiError;
use crate::models::CheckupType;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckupTypeFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_minutes: u32,
    pub max_slots_per_time: u32,
    pub is_active: i32,
}

impl CheckupTypeFields {
    pub fn form_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", self.price.to_string()),
            ("duration_minutes", self.duration_minutes.to_string()),
            ("max_slots_per_time", self.max_slots_per_time.to_string()),
            ("is_active", self.is_active.to_string()),
        ]
    }
}

pub async fn list_checkup_types() -> Result<Vec<CheckupType>, ApiError> {
    get_json("/api/checkup-types", "Failed to load checkup types").await
}

pub async fn get_checkup_type(id: u32) -> Result<CheckupType, ApiError> {
    get_json(&format!("/api/checkup-types/{}", id), "Failed to load checkup type details").await
}

pub async fn create_checkup_type(fields: &CheckupTypeFields, image: Option<&web_sys::File>) -> Result<(), ApiError> {
    let form = build_form_data(&fields.form_entries(), image)?;
    send_multipart("POST", "/api/checkup-types", form, "Failed to add checkup type")
        .await
        .map(|_| ())
}

pub async fn update_checkup_type(id: u32, fields: &CheckupTypeFields, image: Option<&web_sys::File>) -> Result<(), ApiError> {
    let mut entries = fields.form_entries();
    entries.push(("checkup_id", id.to_string()));
    let form = build_form_data(&entries, image)?;
    send_multipart("PUT", &format!("/api/checkup-types/{}", id), form, "Failed to update checkup type")
        .await
        .map(|_| ())
}

pub async fn delete_checkup_type(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/checkup-types/{}", id), "Failed to delete checkup type").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_entries() {
        let fields = CheckupTypeFields {
            name: "Thyroid Panel".into(),
            description: String::new(),
            price: 85.5,
            duration_minutes: 15,
            max_slots_per_time: 6,
            is_active: 0,
        };
        let entries = fields.form_entries();
        assert_eq!(entries[2], ("price", "85.5".to_string()));
        assert_eq!(entries[5], ("is_active", "0".to_string()));
        assert_eq!(entries.len(), 6);
    }
}

//! Specialist Endpoints

use super::{build_form_data, delete, get_json, send_multipart};
use crate::error::ApiError;
use crate::models::Specialist;

#[derive(Debug, Clone, PartialEq)]
pub struct SpecialistFields {
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub bio: String,
    pub is_active: i32,
    /// Current image, resent when no new file is attached
    pub image_path: Option<String>,
}

impl SpecialistFields {
    pub fn form_entries(&self, has_new_image: bool) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("name", self.name.clone()),
            ("title", self.title.clone()),
            ("specialization", self.specialization.clone()),
            ("bio", self.bio.clone()),
            ("is_active", self.is_active.to_string()),
        ];
        if !has_new_image {
            if let Some(path) = &self.image_path {
                entries.push(("image_path", path.clone()));
            }
        }
        entries
    }
}

pub async fn list_specialists() -> Result<Vec<Specialist>, ApiError> {
    get_json("/api/specialists", "Failed to load specialists").await
}

pub async fn get_specialist(id: u32) -> Result<Specialist, ApiError> {
    get_json(&format!("/api/specialists/{}", id), "Failed to load specialist details").await
}

pub async fn create_specialist(fields: &SpecialistFields, image: Option<&web_sys::File>) -> Result<(), ApiError> {
    let form = build_form_data(&fields.form_entries(image.is_some()), image)?;
    send_multipart("POST", "/api/specialists", form, "Failed to add specialist")
        .await
        .map(|_| ())
}

pub async fn update_specialist(id: u32, fields: &SpecialistFields, image: Option<&web_sys::File>) -> Result<(), ApiError> {
    let form = build_form_data(&fields.form_entries(image.is_some()), image)?;
    send_multipart("PUT", &format!("/api/specialists/{}", id), form, "Failed to update specialist")
        .await
        .map(|_| ())
}

pub async fn delete_specialist(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/specialists/{}", id), "Failed to delete specialist").await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> SpecialistFields {
        SpecialistFields {
            name: "Dr Lim".into(),
            title: "Senior Consultant".into(),
            specialization: "Obstetrics".into(),
            bio: String::new(),
            is_active: 1,
            image_path: Some("uploads/lim.jpg".into()),
        }
    }

    #[test]
    fn test_existing_image_path_resent_without_new_file() {
        let entries = fields().form_entries(false);
        assert!(entries.contains(&("image_path", "uploads/lim.jpg".to_string())));

        let entries = fields().form_entries(true);
        assert!(entries.iter().all(|(name, _)| *name != "image_path"));
    }
}

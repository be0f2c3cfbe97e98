//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// `user_type` value the backend grants admin access to
pub const ADMIN_USER_TYPE: &str = "Admin";

/// Records that can be listed, edited and deleted by id
pub trait Record {
    fn id(&self) -> u32;
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u32,
    pub user_name: String,
    #[serde(default)]
    pub gender: String,
    pub email: String,
    pub username: String,
    pub user_type: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_type == ADMIN_USER_TYPE
    }

    pub fn is_patient(&self) -> bool {
        self.user_type == "Normal"
    }
}

impl Record for User {
    fn id(&self) -> u32 {
        self.user_id
    }
}

/// Appointment data structure (matches backend, plus patient enrichment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub user_name: Option<String>,
    pub checkup_id: u32,
    pub checkup_name: String,
    /// YYYY-MM-DD
    pub appointment_date: String,
    /// HH:MM:SS
    pub appointment_time: String,
    #[serde(default)]
    pub price_paid: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub patient_email: Option<String>,
}

impl Record for Appointment {
    fn id(&self) -> u32 {
        self.appointment_id
    }
}

/// Checkup type data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckupType {
    pub checkup_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub duration_minutes: u32,
    pub max_slots_per_time: u32,
    #[serde(default)]
    pub image_path: Option<String>,
    pub is_active: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CheckupType {
    pub fn active(&self) -> bool {
        self.is_active == 1
    }
}

impl Record for CheckupType {
    fn id(&self) -> u32 {
        self.checkup_id
    }
}

/// Specialist data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub specialist_id: u32,
    pub name: String,
    pub title: String,
    pub specialization: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub is_active: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Specialist {
    pub fn active(&self) -> bool {
        self.is_active == 1
    }
}

impl Record for Specialist {
    fn id(&self) -> u32 {
        self.specialist_id
    }
}

/// Health fact data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthFact {
    pub fact_id: u32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    pub is_featured: i32,
    pub is_active: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HealthFact {
    pub fn active(&self) -> bool {
        self.is_active == 1
    }

    pub fn featured(&self) -> bool {
        self.is_featured == 1
    }
}

impl Record for HealthFact {
    fn id(&self) -> u32 {
        self.fact_id
    }
}

/// Remaining capacity for a date/time/checkup combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub checkup_name: Option<String>,
    pub max_slots: u32,
    pub booked_slots: u32,
    pub slots_remaining: i64,
    pub is_available: bool,
}

/// Logged-in user as returned by `POST /login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: u32,
    pub user_name: String,
    pub user_type: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.user_type == ADMIN_USER_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_tolerates_missing_enrichment() {
        let json = r#"{
            "appointment_id": 7,
            "user_id": 3,
            "user_name": "Aisha",
            "checkup_id": 2,
            "checkup_name": "Blood Test",
            "appointment_date": "2026-10-14",
            "appointment_time": "09:30:00",
            "price_paid": 45.0,
            "status": "Confirmed",
            "created_at": null
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.id(), 7);
        assert_eq!(appt.user_name.as_deref(), Some("Aisha"));
        assert!(appt.patient_name.is_none());
    }

    #[test]
    fn test_checkup_type_flags() {
        let json = r#"{
            "checkup_id": 1,
            "name": "Full Body",
            "description": null,
            "price": 120.5,
            "duration_minutes": 60,
            "max_slots_per_time": 4,
            "image_path": "uploads/full.png",
            "is_active": 0
        }"#;
        let checkup: CheckupType = serde_json::from_str(json).unwrap();
        assert!(!checkup.active());
        assert_eq!(checkup.max_slots_per_time, 4);
    }

    #[test]
    fn test_admin_detection_matches_backend_exactly() {
        let mut user = User {
            user_id: 1,
            user_name: "Root".into(),
            gender: "Male".into(),
            email: "root@example.com".into(),
            username: "root".into(),
            user_type: "Admin".into(),
        };
        let mut session = SessionUser {
            user_id: 1,
            user_name: "Root".into(),
            user_type: "Admin".into(),
        };
        assert!(user.is_admin());
        assert!(session.is_admin());
        assert!(!user.is_patient());

        user.user_type = "ADMIN".into();
        session.user_type = "ADMIN".into();
        assert_eq!(user.is_admin(), session.is_admin());
        assert!(!user.is_admin());
    }
}

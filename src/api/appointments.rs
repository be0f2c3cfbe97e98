//! Appointment Endpoints

use serde::Serialize;

use super::{delete, encode, get_json, send_json};
use crate::error::ApiError;
use crate::models::{Appointment, SlotAvailability};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentPayload {
    pub user_id: u32,
    pub appointment_date: String,
    /// HH:MM:SS
    pub appointment_time: String,
    pub checkup_id: u32,
}

pub async fn list_appointments() -> Result<Vec<Appointment>, ApiError> {
    get_json("/api/appointments", "Failed to load appointments").await
}

pub async fn create_appointment(payload: &AppointmentPayload) -> Result<(), ApiError> {
    send_json("POST", "/api/appointments", payload, "Failed to add appointment")
        .await
        .map(|_| ())
}

pub async fn update_appointment(id: u32, payload: &AppointmentPayload) -> Result<(), ApiError> {
    send_json("PUT", &format!("/api/appointments/{}", id), payload, "Failed to update appointment")
        .await
        .map(|_| ())
}

pub async fn delete_appointment(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/appointments/{}", id), "Failed to delete appointment").await
}

pub fn slot_query(date: &str, time: &str, checkup_id: u32) -> String {
    format!(
        "/api/check-slot-availability?date={}&time={}&checkup_id={}",
        encode(date),
        encode(time),
        checkup_id
    )
}

pub async fn check_slot_availability(date: &str, time: &str, checkup_id: u32) -> Result<SlotAvailability, ApiError> {
    get_json(&slot_query(date, time, checkup_id), "Failed to check availability").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_query() {
        assert_eq!(
            slot_query("2026-10-20", "14:30", 3),
            "/api/check-slot-availability?date=2026-10-20&time=14%3A30&checkup_id=3"
        );
    }
}

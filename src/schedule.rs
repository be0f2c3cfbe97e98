//! Appointment Scheduling Helpers
//!
//! Ordering, status badges, patient enrichment and dashboard statistics.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{Appointment, User};

pub const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Accepts `HH:MM:SS` and `HH:MM`.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Combined date and time of an appointment
pub fn starts_at(appt: &Appointment) -> Option<NaiveDateTime> {
    Some(parse_date(&appt.appointment_date)?.and_time(parse_time(&appt.appointment_time)?))
}

/// Unparseable starts sort after every valid one, in either direction.
fn compare_starts(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>, newest_first: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if newest_first => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Oldest first, for the appointments table. Stable for equal starts.
pub fn sort_ascending(appts: &mut [Appointment]) {
    appts.sort_by(|a, b| compare_starts(starts_at(a), starts_at(b), false));
}

/// Newest first, for recent activity.
pub fn sort_descending(appts: &mut [Appointment]) {
    appts.sort_by(|a, b| compare_starts(starts_at(a), starts_at(b), true));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Completed,
    Today,
    Upcoming,
}

impl AppointmentStatus {
    /// Past starts are completed; later today is `Today`; anything else upcoming.
    pub fn at(appt: &Appointment, now: NaiveDateTime) -> Self {
        match starts_at(appt) {
            Some(start) if start < now => Self::Completed,
            Some(start) if start.date() == now.date() => Self::Today,
            _ => Self::Upcoming,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Completed => "badge badge-success",
            Self::Today => "badge badge-warning",
            Self::Upcoming => "badge badge-info",
        }
    }
}

/// Fill `patient_name` / `patient_email` from the patient list.
pub fn enrich_with_patients(appts: &mut [Appointment], patients: &[User]) {
    for appt in appts.iter_mut() {
        match patients.iter().find(|p| p.user_id == appt.user_id) {
            Some(patient) => {
                appt.patient_name = Some(patient.user_name.clone());
                appt.patient_email = Some(patient.email.clone());
            }
            None => {
                if appt.patient_name.is_none() {
                    appt.patient_name = Some(appt.user_name.clone().unwrap_or_else(|| "Unknown".to_string()));
                }
            }
        }
    }
}

// ========================
// Dashboard
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub doctors: usize,
    pub patients: usize,
    pub total_appointments: usize,
    pub today_appointments: usize,
    pub upcoming_appointments: usize,
}

impl DashboardStats {
    pub fn compute(users: &[User], appts: &[Appointment], today: NaiveDate) -> Self {
        let on = |pred: &dyn Fn(NaiveDate) -> bool| {
            appts
                .iter()
                .filter_map(|a| parse_date(&a.appointment_date))
                .filter(|d| pred(*d))
                .count()
        };
        Self {
            total_users: users.len(),
            doctors: users.iter().filter(|u| u.user_type == "Doctor").count(),
            patients: users.iter().filter(|u| u.is_patient()).count(),
            total_appointments: appts.len(),
            today_appointments: on(&|d: NaiveDate| d == today),
            upcoming_appointments: on(&|d: NaiveDate| d > today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityEntry {
    pub appointment_id: u32,
    pub patient_name: String,
    pub checkup_name: String,
    pub starts_at: Option<NaiveDateTime>,
}

/// The most recent appointments, newest first, with their patient names.
pub fn recent_activity(appts: &[Appointment], users: &[User], limit: usize) -> Vec<ActivityEntry> {
    let mut sorted = appts.to_vec();
    sort_descending(&mut sorted);
    sorted
        .into_iter()
        .take(limit)
        .map(|appt| {
            let patient_name = users
                .iter()
                .find(|u| u.user_id == appt.user_id)
                .map(|u| u.user_name.clone())
                .unwrap_or_else(|| "Unknown User".to_string());
            ActivityEntry {
                appointment_id: appt.appointment_id,
                starts_at: starts_at(&appt),
                patient_name,
                checkup_name: appt.checkup_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(id: u32, user_id: u32, date: &str, time: &str) -> Appointment {
        Appointment {
            appointment_id: id,
            user_id,
            user_name: Some(format!("backend user {}", user_id)),
            checkup_id: 1,
            checkup_name: "General Checkup".to_string(),
            appointment_date: date.to_string(),
            appointment_time: time.to_string(),
            price_paid: None,
            status: None,
            created_at: None,
            patient_name: None,
            patient_email: None,
        }
    }

    fn user(id: u32, name: &str, user_type: &str) -> User {
        User {
            user_id: id,
            user_name: name.to_string(),
            gender: "Male".to_string(),
            email: format!("{}@clinic.test", id),
            username: name.to_lowercase(),
            user_type: user_type.to_string(),
        }
    }

    fn ids(appts: &[Appointment]) -> Vec<u32> {
        appts.iter().map(|a| a.appointment_id).collect()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_sort_by_date_then_time() {
        let mut list = vec![
            appt(1, 1, "2026-10-15", "09:00:00"),
            appt(2, 1, "2026-10-14", "16:30:00"),
            appt(3, 1, "not a date", "10:00:00"),
            appt(4, 1, "2026-10-14", "08:15"),
        ];
        sort_ascending(&mut list);
        assert_eq!(ids(&list), vec![4, 2, 1, 3]);

        sort_descending(&mut list);
        assert_eq!(ids(&list), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_status_relative_to_now() {
        let past = appt(1, 1, "2026-10-14", "08:00:00");
        let later_today = appt(2, 1, "2026-10-14", "15:00:00");
        let future = appt(3, 1, "2026-11-01", "08:00:00");
        assert_eq!(AppointmentStatus::at(&past, now()), AppointmentStatus::Completed);
        assert_eq!(AppointmentStatus::at(&later_today, now()), AppointmentStatus::Today);
        assert_eq!(AppointmentStatus::at(&future, now()), AppointmentStatus::Upcoming);
        assert_eq!(AppointmentStatus::Today.label(), "Today");
    }

    #[test]
    fn test_enrich_prefers_patient_list() {
        let mut list = vec![appt(1, 10, "2026-10-14", "09:00:00"), appt(2, 11, "2026-10-14", "09:00:00")];
        let patients = vec![user(10, "Siti", "Normal")];
        enrich_with_patients(&mut list, &patients);

        assert_eq!(list[0].patient_name.as_deref(), Some("Siti"));
        assert_eq!(list[0].patient_email.as_deref(), Some("10@clinic.test"));
        assert_eq!(list[1].patient_name.as_deref(), Some("backend user 11"));
        assert_eq!(list[1].patient_email, None);
    }

    #[test]
    fn test_dashboard_stats() {
        let users = vec![user(1, "Dr A", "Doctor"), user(2, "P", "Normal"), user(3, "Q", "Normal"), user(4, "Admin", "Admin")];
        let today = now().date();
        let appts = vec![
            appt(1, 2, "2026-10-13", "09:00:00"),
            appt(2, 2, "2026-10-14", "09:00:00"),
            appt(3, 3, "2026-10-14", "17:00:00"),
            appt(4, 3, "2026-12-01", "09:00:00"),
        ];
        let stats = DashboardStats::compute(&users, &appts, today);
        assert_eq!(
            stats,
            DashboardStats {
                total_users: 4,
                doctors: 1,
                patients: 2,
                total_appointments: 4,
                today_appointments: 2,
                upcoming_appointments: 1,
            }
        );
    }

    #[test]
    fn test_recent_activity_takes_newest() {
        let users = vec![user(2, "Priya", "Normal")];
        let appts: Vec<Appointment> = (1..=7)
            .map(|day| appt(day, if day % 2 == 0 { 2 } else { 99 }, &format!("2026-10-{:02}", day), "10:00:00"))
            .collect();
        let recent = recent_activity(&appts, &users, RECENT_ACTIVITY_LIMIT);

        assert_eq!(recent.len(), 5);
        assert_eq!(recent.iter().map(|e| e.appointment_id).collect::<Vec<_>>(), vec![7, 6, 5, 4, 3]);
        assert_eq!(recent[0].patient_name, "Unknown User");
        assert_eq!(recent[1].patient_name, "Priya");
    }
}

//! Display Formatting
//!
//! Dates, times, prices and truncated text as shown in the tables.

use chrono::{NaiveDate, NaiveDateTime};

pub const DESCRIPTION_PREVIEW: usize = 50;

/// Health fact content gets a longer preview
pub const CONTENT_PREVIEW: usize = 100;

/// Shown when an uploaded image fails to load
pub const DEFAULT_CHECKUP_IMAGE: &str = "/assets/default_checkup.svg";
pub const DEFAULT_SPECIALIST_IMAGE: &str = "/assets/default-specialist.svg";

/// `MM/DD/YYYY`. Missing input is `N/A`; unparseable input is returned as is.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date.filter(|d| !d.is_empty()) else {
        return "N/A".to_string();
    };
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%m/%d/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// `h:MM AM/PM` from `HH:MM[:SS]`.
pub fn format_time(time: Option<&str>) -> String {
    let Some(time) = time.filter(|t| !t.is_empty()) else {
        return "N/A".to_string();
    };
    let mut parts = time.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return time.to_string();
    };
    let (Ok(hours), Ok(minutes)) = (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>()) else {
        return time.to_string();
    };
    let meridiem = if hours >= 12 { "PM" } else { "AM" };
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hours, minutes, meridiem)
}

/// `Oct 14, 2026 at 09:30 AM` for the activity feed
pub fn format_activity_time(at: Option<NaiveDateTime>) -> String {
    match at {
        Some(at) => at.format("%b %-d, %Y at %I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

pub fn format_price(price: f64) -> String {
    format!("RM {:.2}", price)
}

/// First 50 characters plus `...`, or `-` when empty.
pub fn preview(text: Option<&str>) -> String {
    truncate(text, DESCRIPTION_PREVIEW)
}

pub fn truncate(text: Option<&str>, limit: usize) -> String {
    match text.filter(|t| !t.is_empty()) {
        None => "-".to_string(),
        Some(text) if text.chars().count() > limit => {
            let cut: String = text.chars().take(limit).collect();
            format!("{}...", cut)
        }
        Some(text) => text.to_string(),
    }
}

/// Uploaded image paths are stored relative; the browser needs them rooted.
pub fn image_src(path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http") {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

pub fn active_label(flag: i32) -> &'static str {
    if flag == 1 { "Active" } else { "Inactive" }
}

pub fn active_class(flag: i32) -> &'static str {
    if flag == 1 { "status-badge status-active" } else { "status-badge status-inactive" }
}

pub fn featured_label(flag: i32) -> &'static str {
    if flag == 1 { "Featured" } else { "Not Featured" }
}

pub fn featured_class(flag: i32) -> &'static str {
    if flag == 1 { "status-badge status-featured" } else { "status-badge status-not-featured" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2026-03-07")), "03/07/2026");
        assert_eq!(format_date(Some("2026-03-07T10:00:00")), "03/07/2026");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some("13:30:00")), "1:30 PM");
        assert_eq!(format_time(Some("00:05")), "12:05 AM");
        assert_eq!(format_time(Some("12:00:00")), "12:00 PM");
        assert_eq!(format_time(Some("noon")), "noon");
        assert_eq!(format_time(None), "N/A");
    }

    #[test]
    fn test_activity_time() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 4).unwrap().and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_activity_time(Some(at)), "Oct 4, 2026 at 09:05 AM");
    }

    #[test]
    fn test_price_and_preview() {
        assert_eq!(format_price(85.0), "RM 85.00");
        assert_eq!(preview(None), "-");
        assert_eq!(preview(Some("short")), "short");
        let long = "x".repeat(60);
        assert_eq!(preview(Some(&long)), format!("{}...", "x".repeat(50)));
        assert_eq!(truncate(Some(&long), CONTENT_PREVIEW), long);
    }

    #[test]
    fn test_image_src() {
        assert_eq!(image_src("uploads/a.png"), "/uploads/a.png");
        assert_eq!(image_src("/uploads/a.png"), "/uploads/a.png");
    }
}

//! Form Validation
//!
//! Every validator checks all fields before returning, so the form can show
//! each problem at once. A successful validation yields the request payload.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::{
    AppointmentPayload, CheckupTypeFields, HealthFactPayload, LoginPayload, SignupPayload,
    SpecialistFields, UserPayload,
};
use crate::models::{CheckupType, HealthFact, Specialist};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const PHONE_MIN_DIGITS: usize = 8;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const CHECKUP_MIN_DURATION: u32 = 5;

pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight digits once separators are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    digits_only(phone).len() >= PHONE_MIN_DIGITS
}

/// At least six characters with a letter and a digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Per-field error messages in the order they were found
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(Vec<(&'static str, String)>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn remove(&mut self, field: &str) {
        self.0.retain(|(f, _)| *f != field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(f, _)| *f)
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(u32),
}

// ========================
// Users
// ========================

#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub gender: String,
    pub user_type: String,
}

pub fn validate_user(form: &UserForm, mode: FormMode) -> Result<UserPayload, FormErrors> {
    let mut errors = FormErrors::default();

    if is_empty(&form.name) {
        errors.add("user-name", "Name is required");
    }
    if is_empty(&form.email) {
        errors.add("user-email", "Email is required");
    } else if !is_valid_email(form.email.trim()) {
        errors.add("user-email", "Please enter a valid email");
    }
    if is_empty(&form.username) {
        errors.add("user-username", "Username is required");
    }
    if mode == FormMode::Add && is_empty(&form.password) {
        errors.add("user-password", "Password is required");
    } else if !is_empty(&form.password) && !is_valid_password(&form.password) {
        errors.add(
            "user-password",
            "Password must be at least 6 characters with at least one letter and one number",
        );
    }

    errors.finish(|| UserPayload {
        user_name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        username: form.username.trim().to_string(),
        gender: form.gender.clone(),
        user_type: form.user_type.clone(),
        password: (!is_empty(&form.password)).then(|| form.password.clone()),
    })
}

// ========================
// Appointments
// ========================

#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub checkup_id: String,
}

/// `HH:MM` from a time input becomes `HH:MM:00`.
pub fn with_seconds(time: &str) -> String {
    if time.matches(':').count() >= 2 {
        time.to_string()
    } else {
        format!("{}:00", time)
    }
}

pub fn validate_appointment(form: &AppointmentForm) -> Result<AppointmentPayload, FormErrors> {
    let mut errors = FormErrors::default();

    let patient = form.patient_id.trim().parse::<u32>().ok();
    if patient.is_none() {
        errors.add("appointment-patient", "Patient is required");
    }
    if is_empty(&form.date) {
        errors.add("appointment-date", "Date is required");
    }
    if is_empty(&form.time) {
        errors.add("appointment-time", "Time is required");
    }
    let checkup = form.checkup_id.trim().parse::<u32>().ok();
    if checkup.is_none() {
        errors.add("appointment-type", "Appointment type is required");
    }

    let (Some(user_id), Some(checkup_id)) = (patient, checkup) else {
        return Err(errors);
    };
    errors.finish(|| AppointmentPayload {
        user_id,
        appointment_date: form.date.trim().to_string(),
        appointment_time: with_seconds(form.time.trim()),
        checkup_id,
    })
}

// ========================
// Checkup Types
// ========================

#[derive(Debug, Clone)]
pub struct CheckupTypeForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub max_slots: String,
    pub active: bool,
}

impl Default for CheckupTypeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            duration: "30".to_string(),
            max_slots: "10".to_string(),
            active: true,
        }
    }
}

/// Edit form seeded from a stored checkup type
impl From<&CheckupType> for CheckupTypeForm {
    fn from(checkup: &CheckupType) -> Self {
        Self {
            name: checkup.name.clone(),
            description: checkup.description.clone().unwrap_or_default(),
            price: checkup.price.to_string(),
            duration: checkup.duration_minutes.to_string(),
            max_slots: checkup.max_slots_per_time.to_string(),
            active: checkup.active(),
        }
    }
}

pub fn validate_checkup_type(form: &CheckupTypeForm) -> Result<CheckupTypeFields, FormErrors> {
    let mut errors = FormErrors::default();

    if is_empty(&form.name) {
        errors.add("checkup-name", "Name is required");
    }
    let price = form.price.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0);
    if price.is_none() {
        errors.add("checkup-price", "Please enter a valid price");
    }
    let duration = form.duration.trim().parse::<u32>().ok().filter(|d| *d >= CHECKUP_MIN_DURATION);
    if duration.is_none() {
        errors.add("checkup-duration", "Duration must be at least 5 minutes");
    }
    let max_slots = form.max_slots.trim().parse::<u32>().ok().filter(|m| *m >= 1);
    if max_slots.is_none() {
        errors.add("checkup-max-slots", "Maximum slots must be at least 1");
    }

    let (Some(price), Some(duration_minutes), Some(max_slots_per_time)) = (price, duration, max_slots) else {
        return Err(errors);
    };
    errors.finish(|| CheckupTypeFields {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        price,
        duration_minutes,
        max_slots_per_time,
        is_active: i32::from(form.active),
    })
}

// ========================
// Specialists
// ========================

#[derive(Debug, Clone)]
pub struct SpecialistForm {
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub bio: String,
    pub active: bool,
    /// Kept when no new file is chosen
    pub existing_image_path: Option<String>,
}

impl Default for SpecialistForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            specialization: String::new(),
            bio: String::new(),
            active: true,
            existing_image_path: None,
        }
    }
}

impl From<&Specialist> for SpecialistForm {
    fn from(specialist: &Specialist) -> Self {
        Self {
            name: specialist.name.clone(),
            title: specialist.title.clone(),
            specialization: specialist.specialization.clone(),
            bio: specialist.bio.clone().unwrap_or_default(),
            active: specialist.active(),
            existing_image_path: specialist.image_path.clone(),
        }
    }
}

pub fn validate_specialist(form: &SpecialistForm) -> Result<SpecialistFields, FormErrors> {
    let mut errors = FormErrors::default();

    if is_empty(&form.name) {
        errors.add("specialist-name", "Name is required");
    }
    if is_empty(&form.title) {
        errors.add("specialist-title", "Title is required");
    }
    if is_empty(&form.specialization) {
        errors.add("specialist-specialization", "Specialization is required");
    }

    errors.finish(|| SpecialistFields {
        name: form.name.trim().to_string(),
        title: form.title.trim().to_string(),
        specialization: form.specialization.trim().to_string(),
        bio: form.bio.trim().to_string(),
        is_active: i32::from(form.active),
        image_path: form.existing_image_path.clone().filter(|p| !p.is_empty()),
    })
}

// ========================
// Health Facts
// ========================

#[derive(Debug, Clone)]
pub struct HealthFactForm {
    pub title: String,
    pub content: String,
    pub category: String,
    pub featured: bool,
    pub active: bool,
}

impl Default for HealthFactForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: String::new(),
            featured: false,
            active: true,
        }
    }
}

impl From<&HealthFact> for HealthFactForm {
    fn from(fact: &HealthFact) -> Self {
        Self {
            title: fact.title.clone(),
            content: fact.content.clone(),
            category: fact.category.clone().unwrap_or_default(),
            featured: fact.featured(),
            active: fact.active(),
        }
    }
}

pub fn validate_health_fact(form: &HealthFactForm) -> Result<HealthFactPayload, FormErrors> {
    let mut errors = FormErrors::default();

    if is_empty(&form.title) {
        errors.add("fact-title", "Title is required");
    }
    if is_empty(&form.content) {
        errors.add("fact-content", "Content is required");
    }

    let category = form.category.trim();
    errors.finish(|| HealthFactPayload {
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
        category: (!category.is_empty()).then(|| category.to_string()),
        is_featured: i32::from(form.featured),
        is_active: i32::from(form.active),
    })
}

// ========================
// Signup / Login
// ========================

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub birthday: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_signup(form: &SignupForm) -> Result<SignupPayload, FormErrors> {
    let mut errors = FormErrors::default();
    let username = form.username.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();

    if username.is_empty() {
        errors.add("username", "Username is required");
    } else if username.chars().count() < USERNAME_MIN_LENGTH {
        errors.add("username", "Username must be at least 3 characters");
    }
    if is_empty(&form.full_name) {
        errors.add("fullname", "Full name is required");
    }
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "Please enter a valid email address");
    }
    if phone.is_empty() {
        errors.add("phone", "Phone number is required");
    } else if !is_valid_phone(phone) {
        errors.add("phone", "Please enter a valid phone number");
    }
    if form.gender.is_empty() {
        errors.add("gender", "Please select your gender");
    }
    if form.birthday.is_empty() {
        errors.add("birthday", "Date of birth is required");
    }
    if form.password.is_empty() {
        errors.add("password", "Password is required");
    } else if form.password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.add("password", "Password must be at least 6 characters");
    }
    if form.password != form.confirm_password {
        errors.add("confirm-password", "Passwords do not match");
    }

    errors.finish(|| SignupPayload {
        username: username.to_string(),
        user_name: form.full_name.trim().to_string(),
        email: email.to_string(),
        phone_number: digits_only(phone),
        gender: form.gender.clone(),
        birthday: form.birthday.clone(),
        password: form.password.clone(),
        user_type: "Normal".to_string(),
    })
}

pub fn validate_login(username: &str, password: &str) -> Result<LoginPayload, String> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Please enter both username and password".to_string());
    }
    Ok(LoginPayload { username: username.to_string(), password: password.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules() {
        assert!(is_valid_password("abc123"));
        assert!(!is_valid_password("abcdef"));
        assert!(!is_valid_password("123456"));
        assert!(!is_valid_password("ab12"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(!is_valid_phone("1234567"));
        assert!(is_valid_phone("12345678"));
        assert!(is_valid_phone("+60 (12) 345-678"));
        assert!(!is_valid_phone("phone"));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("nurse@clinic.my"));
        assert!(!is_valid_email("nurse@clinic"));
        assert!(!is_valid_email("nurse clinic@x.my"));
        assert!(!is_valid_email("@clinic.my"));
    }

    #[test]
    fn test_user_validation_collects_every_error() {
        let form = UserForm { email: "not-an-email".into(), password: "short".into(), ..Default::default() };
        let errors = validate_user(&form, FormMode::Add).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["user-name", "user-email", "user-username", "user-password"]
        );
        assert_eq!(errors.get("user-email"), Some("Please enter a valid email"));
    }

    #[test]
    fn test_user_edit_allows_blank_password() {
        let form = UserForm {
            name: "Farah".into(),
            email: "farah@clinic.my".into(),
            username: "farah".into(),
            gender: "Female".into(),
            user_type: "Normal".into(),
            ..Default::default()
        };
        let payload = validate_user(&form, FormMode::Edit(4)).unwrap();
        assert_eq!(payload.password, None);
        assert!(validate_user(&form, FormMode::Add).is_err());
    }

    #[test]
    fn test_appointment_time_gets_seconds() {
        let form = AppointmentForm {
            patient_id: "12".into(),
            date: "2026-10-20".into(),
            time: "14:30".into(),
            checkup_id: "3".into(),
        };
        let payload = validate_appointment(&form).unwrap();
        assert_eq!(payload.appointment_time, "14:30:00");
        assert_eq!(payload.user_id, 12);
        assert_eq!(with_seconds("09:00:00"), "09:00:00");

        let errors = validate_appointment(&AppointmentForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_checkup_type_bounds() {
        let form = CheckupTypeForm {
            name: "ECG".into(),
            price: "-1".into(),
            duration: "4".into(),
            max_slots: "0".into(),
            ..Default::default()
        };
        let errors = validate_checkup_type(&form).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["checkup-price", "checkup-duration", "checkup-max-slots"]
        );

        let fields = validate_checkup_type(&CheckupTypeForm { name: "ECG".into(), price: "0".into(), ..Default::default() }).unwrap();
        assert_eq!(fields.duration_minutes, 30);
        assert_eq!(fields.max_slots_per_time, 10);
        assert_eq!(fields.is_active, 1);
    }

    #[test]
    fn test_specialist_keeps_existing_image() {
        let form = SpecialistForm {
            name: "Dr Tan".into(),
            title: "Consultant".into(),
            specialization: "Cardiology".into(),
            existing_image_path: Some("uploads/tan.png".into()),
            ..Default::default()
        };
        let fields = validate_specialist(&form).unwrap();
        assert_eq!(fields.image_path.as_deref(), Some("uploads/tan.png"));
        assert!(is_image_mime("image/png"));
        assert!(!is_image_mime("application/pdf"));
    }

    #[test]
    fn test_health_fact_blank_category_is_null() {
        let form = HealthFactForm { title: "Walk".into(), content: "Daily".into(), category: "  ".into(), ..Default::default() };
        let payload = validate_health_fact(&form).unwrap();
        assert_eq!(payload.category, None);
        assert_eq!(payload.is_featured, 0);

        let errors = validate_health_fact(&HealthFactForm::default()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["fact-title", "fact-content"]);
    }

    #[test]
    fn test_signup_validation() {
        let form = SignupForm {
            username: "al".into(),
            full_name: "Ali".into(),
            email: "ali@clinic.my".into(),
            phone: "012-345 6789".into(),
            gender: "Male".into(),
            birthday: "1990-01-01".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["username", "confirm-password"]);

        let ok = SignupForm { username: "ali".into(), confirm_password: "secret1".into(), ..form };
        let payload = validate_signup(&ok).unwrap();
        assert_eq!(payload.phone_number, "0123456789");
        assert_eq!(payload.user_type, "Normal");
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("  ", "pw").is_err());
        assert!(validate_login("admin", "").is_err());
        assert_eq!(validate_login(" admin ", "pw").unwrap().username, "admin");
    }

    #[test]
    fn test_edit_forms_seed_from_stored_records() {
        let checkup = CheckupType {
            checkup_id: 3,
            name: "ECG".into(),
            description: None,
            price: 45.5,
            duration_minutes: 20,
            max_slots_per_time: 2,
            image_path: Some("uploads/ecg.png".into()),
            is_active: 0,
            created_at: None,
        };
        let form = CheckupTypeForm::from(&checkup);
        assert_eq!(form.description, "");
        assert_eq!(form.price, "45.5");
        assert_eq!(form.duration, "20");
        assert!(!form.active);
        assert!(validate_checkup_type(&form).is_ok());

        let specialist = Specialist {
            specialist_id: 8,
            name: "Dr. Tan".into(),
            title: "Consultant".into(),
            specialization: "Cardiology".into(),
            bio: None,
            image_path: Some("uploads/tan.jpg".into()),
            is_active: 1,
            created_at: None,
        };
        let form = SpecialistForm::from(&specialist);
        assert!(form.active);
        assert_eq!(form.bio, "");
        let fields = validate_specialist(&form).unwrap();
        assert_eq!(fields.image_path.as_deref(), Some("uploads/tan.jpg"));

        let fact = HealthFact {
            fact_id: 5,
            title: "Hydration".into(),
            content: "Drink water".into(),
            category: None,
            is_featured: 1,
            is_active: 0,
            created_at: None,
        };
        let form = HealthFactForm::from(&fact);
        assert!(form.featured);
        assert!(!form.active);
        assert_eq!(validate_health_fact(&form).unwrap().category, None);
    }
}

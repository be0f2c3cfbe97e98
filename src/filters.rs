//! Table Filters
//!
//! Search-term and dropdown predicates for each admin table.

use chrono::NaiveDate;

use crate::models::{Appointment, CheckupType, HealthFact, Specialist, User};

/// Lowercased, trimmed search term. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any present field contains the term.
    pub fn matches_any(&self, fields: &[Option<&str>]) -> bool {
        self.is_empty()
            || fields
                .iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// `all` / `active` / `inactive` status dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::All,
        }
    }

    pub fn matches(self, flag: i32) -> bool {
        match self {
            Self::All => true,
            Self::Active => flag == 1,
            Self::Inactive => flag == 0,
        }
    }
}

/// `all` / `featured` / `not-featured` dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeaturedFilter {
    #[default]
    All,
    Featured,
    NotFeatured,
}

impl FeaturedFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "featured" => Self::Featured,
            "not-featured" => Self::NotFeatured,
            _ => Self::All,
        }
    }

    pub fn matches(self, flag: i32) -> bool {
        match self {
            Self::All => true,
            Self::Featured => flag == 1,
            Self::NotFeatured => flag == 0,
        }
    }
}

/// Exact-value dropdown (specialization, category). `all` or empty is no filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceFilter(Option<String>);

impl ChoiceFilter {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            Self(None)
        } else {
            Self(Some(value.to_string()))
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match &self.0 {
            None => true,
            Some(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// `all` / `today` / `upcoming` / `past` appointment date dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Upcoming,
    Past,
}

impl DateFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "today" => Self::Today,
            "upcoming" => Self::Upcoming,
            "past" => Self::Past,
            _ => Self::All,
        }
    }

    /// Unparseable dates only pass the `All` filter.
    pub fn matches(self, date: &str, today: NaiveDate) -> bool {
        if self == Self::All {
            return true;
        }
        let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            return false;
        };
        match self {
            Self::All => true,
            Self::Today => date == today,
            Self::Upcoming => date > today,
            Self::Past => date < today,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub term: SearchTerm,
    /// Case-insensitive user type, `None` for all
    pub user_type: Option<String>,
}

impl UserFilter {
    pub fn new(term: &str, user_type: &str) -> Self {
        let user_type = match user_type {
            "" | "all" => None,
            other => Some(other.to_lowercase()),
        };
        Self { term: SearchTerm::new(term), user_type }
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(wanted) = &self.user_type {
            if user.user_type.to_lowercase() != *wanted {
                return false;
            }
        }
        self.term.matches_any(&[
            Some(user.user_name.as_str()),
            Some(user.email.as_str()),
            Some(user.username.as_str()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentFilter {
    pub term: SearchTerm,
    pub date: DateFilter,
    pub today: NaiveDate,
}

impl AppointmentFilter {
    pub fn new(term: &str, date: &str, today: NaiveDate) -> Self {
        Self { term: SearchTerm::new(term), date: DateFilter::parse(date), today }
    }

    pub fn matches(&self, appt: &Appointment) -> bool {
        self.date.matches(&appt.appointment_date, self.today)
            && self.term.matches_any(&[
                appt.patient_name.as_deref(),
                Some(appt.checkup_name.as_str()),
            ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckupTypeFilter {
    pub term: SearchTerm,
    pub status: StatusFilter,
}

impl CheckupTypeFilter {
    pub fn new(term: &str, status: &str) -> Self {
        Self { term: SearchTerm::new(term), status: StatusFilter::parse(status) }
    }

    pub fn matches(&self, checkup: &CheckupType) -> bool {
        self.status.matches(checkup.is_active)
            && self.term.matches_any(&[Some(checkup.name.as_str()), checkup.description.as_deref()])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialistFilter {
    pub term: SearchTerm,
    pub status: StatusFilter,
    pub specialization: ChoiceFilter,
}

impl SpecialistFilter {
    pub fn new(term: &str, status: &str, specialization: &str) -> Self {
        Self {
            term: SearchTerm::new(term),
            status: StatusFilter::parse(status),
            specialization: ChoiceFilter::parse(specialization),
        }
    }

    pub fn matches(&self, specialist: &Specialist) -> bool {
        self.status.matches(specialist.is_active)
            && self.specialization.matches(Some(specialist.specialization.as_str()))
            && self.term.matches_any(&[
                Some(specialist.name.as_str()),
                Some(specialist.title.as_str()),
                Some(specialist.specialization.as_str()),
                specialist.bio.as_deref(),
            ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthFactFilter {
    pub term: SearchTerm,
    pub status: StatusFilter,
    pub featured: FeaturedFilter,
    pub category: ChoiceFilter,
}

impl HealthFactFilter {
    pub fn new(term: &str, status: &str, featured: &str, category: &str) -> Self {
        Self {
            term: SearchTerm::new(term),
            status: StatusFilter::parse(status),
            featured: FeaturedFilter::parse(featured),
            category: ChoiceFilter::parse(category),
        }
    }

    pub fn matches(&self, fact: &HealthFact) -> bool {
        self.status.matches(fact.is_active)
            && self.featured.matches(fact.is_featured)
            && self.category.matches(fact.category.as_deref())
            && self.term.matches_any(&[
                Some(fact.title.as_str()),
                Some(fact.content.as_str()),
                fact.category.as_deref(),
            ])
    }
}

/// Distinct non-empty values in first-seen order, for dropdown options.
pub fn distinct_values<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    field: impl Fn(&T) -> Option<&str>,
) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if let Some(value) = field(item).filter(|v| !v.is_empty()) {
            if !seen.iter().any(|s| s == value) {
                seen.push(value.to_string());
            }
        }
    }
    seen
}

/// `(value, label)` pairs for a filter dropdown, led by the `all` choice.
pub fn filter_choices(all_label: &str, values: Vec<String>) -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), all_label.to_string()))
        .chain(values.into_iter().map(|v| (v.clone(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;

    fn user(id: u32, name: &str, user_type: &str) -> User {
        User {
            user_id: id,
            user_name: name.to_string(),
            gender: "Female".to_string(),
            email: format!("{}@clinic.test", name.to_lowercase()),
            username: name.to_lowercase(),
            user_type: user_type.to_string(),
        }
    }

    fn specialist(id: u32, name: &str, specialization: &str, active: i32) -> Specialist {
        Specialist {
            specialist_id: id,
            name: name.to_string(),
            title: "Dr.".to_string(),
            specialization: specialization.to_string(),
            bio: None,
            image_path: None,
            is_active: active,
            created_at: None,
        }
    }

    fn fact(id: u32, title: &str, category: Option<&str>, featured: i32, active: i32) -> HealthFact {
        HealthFact {
            fact_id: id,
            title: title.to_string(),
            content: "Drink water".to_string(),
            category: category.map(str::to_string),
            is_featured: featured,
            is_active: active,
            created_at: None,
        }
    }

    fn appt(id: u32, date: &str, patient: &str, checkup: &str) -> Appointment {
        Appointment {
            appointment_id: id,
            user_id: 1,
            user_name: None,
            checkup_id: 1,
            checkup_name: checkup.to_string(),
            appointment_date: date.to_string(),
            appointment_time: "10:00:00".to_string(),
            price_paid: None,
            status: None,
            created_at: None,
            patient_name: Some(patient.to_string()),
            patient_email: None,
        }
    }

    #[test]
    fn test_empty_search_term_returns_full_collection() {
        let users = vec![user(1, "Amir", "Admin"), user(2, "Bea", "Normal"), user(3, "Chen", "Normal")];
        let filter = UserFilter::new("   ", "all");
        let mut listing = Listing::default();
        listing.replace(users.clone(), |u| filter.matches(u));
        assert_eq!(listing.filtered().cloned().collect::<Vec<_>>(), users);
    }

    #[test]
    fn test_user_filter_combines_type_and_term() {
        let users = vec![user(1, "Amir", "Admin"), user(2, "Amy", "Normal"), user(3, "Chen", "Normal")];
        let filter = UserFilter::new(" AM ", "normal");
        let ids: Vec<u32> = users.iter().filter(|u| filter.matches(u)).map(|u| u.user_id).collect();
        assert_eq!(ids, vec![2]);

        let by_email = UserFilter::new("chen@clinic", "");
        assert!(by_email.matches(&users[2]));
    }

    #[test]
    fn test_specialization_dropdown_filters_exactly() {
        let list = vec![
            specialist(1, "Lee", "Cardiology", 1),
            specialist(2, "Ng", "Cardiology Surgery", 1),
            specialist(3, "Ito", "Dermatology", 0),
        ];
        let filter = SpecialistFilter::new("", "all", "Cardiology");
        let ids: Vec<u32> = list.iter().filter(|s| filter.matches(s)).map(|s| s.specialist_id).collect();
        assert_eq!(ids, vec![1]);

        let inactive = SpecialistFilter::new("derm", "inactive", "all");
        assert!(inactive.matches(&list[2]));
        assert!(!inactive.matches(&list[0]));
    }

    #[test]
    fn test_health_fact_filters() {
        let facts = vec![
            fact(1, "Hydration", Some("Nutrition"), 1, 1),
            fact(2, "Sleep", Some("Lifestyle"), 0, 1),
            fact(3, "Vitamins", None, 0, 0),
        ];
        let featured = HealthFactFilter::new("", "all", "featured", "all");
        assert_eq!(facts.iter().filter(|f| featured.matches(f)).count(), 1);

        let category = HealthFactFilter::new("", "active", "not-featured", "Lifestyle");
        let ids: Vec<u32> = facts.iter().filter(|f| category.matches(f)).map(|f| f.fact_id).collect();
        assert_eq!(ids, vec![2]);

        let by_category_text = HealthFactFilter::new("nutri", "all", "all", "all");
        assert!(by_category_text.matches(&facts[0]));
        assert!(!by_category_text.matches(&facts[2]));
    }

    #[test]
    fn test_checkup_type_status_filter() {
        let checkup = CheckupType {
            checkup_id: 1,
            name: "Eye Exam".to_string(),
            description: Some("Vision screening".to_string()),
            price: 30.0,
            duration_minutes: 20,
            max_slots_per_time: 5,
            image_path: None,
            is_active: 1,
            created_at: None,
        };
        assert!(CheckupTypeFilter::new("vision", "active").matches(&checkup));
        assert!(!CheckupTypeFilter::new("", "inactive").matches(&checkup));
    }

    #[test]
    fn test_appointment_date_filter() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let list = vec![
            appt(1, "2026-10-13", "Ana", "Blood Test"),
            appt(2, "2026-10-14", "Ben", "X-Ray"),
            appt(3, "2026-10-20", "Cai", "Blood Test"),
        ];
        let ids = |filter: AppointmentFilter| -> Vec<u32> {
            list.iter().filter(|a| filter.matches(a)).map(|a| a.appointment_id).collect()
        };
        assert_eq!(ids(AppointmentFilter::new("", "today", today)), vec![2]);
        assert_eq!(ids(AppointmentFilter::new("", "upcoming", today)), vec![3]);
        assert_eq!(ids(AppointmentFilter::new("", "past", today)), vec![1]);
        assert_eq!(ids(AppointmentFilter::new("blood", "", today)), vec![1, 3]);
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let list = vec![
            specialist(1, "A", "Pediatrics", 1),
            specialist(2, "B", "", 1),
            specialist(3, "C", "Cardiology", 1),
            specialist(4, "D", "Pediatrics", 1),
        ];
        let values = distinct_values(&list, |s| Some(s.specialization.as_str()));
        assert_eq!(values, vec!["Pediatrics".to_string(), "Cardiology".to_string()]);
    }

    #[test]
    fn test_filter_choices_keep_value_and_label() {
        let choices = filter_choices("All Specializations", vec!["Pediatrics".into(), "Cardiology".into()]);
        assert_eq!(choices[0], ("all".to_string(), "All Specializations".to_string()));
        assert_eq!(choices[1], ("Pediatrics".to_string(), "Pediatrics".to_string()));
        assert_eq!(choices.len(), 3);

        let choices = filter_choices("All Categories", Vec::new());
        assert_eq!(choices, vec![("all".to_string(), "All Categories".to_string())]);
    }
}

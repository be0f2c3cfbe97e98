//! UI Components
//!
//! Reusable Leptos components and the admin pages built from them.

mod appointments_page;
mod checkup_types_page;
mod dashboard_page;
mod delete_confirm_modal;
pub mod form_field;
mod health_facts_page;
mod image_picker;
mod login_form;
mod modal;
mod nav_bar;
mod notification_host;
mod pagination_bar;
mod signup_form;
mod specialists_page;
mod table_status_row;
mod thumbnail;
mod users_page;

pub use appointments_page::AppointmentsPage;
pub use checkup_types_page::CheckupTypesPage;
pub use dashboard_page::DashboardPage;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use health_facts_page::HealthFactsPage;
pub use image_picker::ImagePicker;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use nav_bar::NavBar;
pub use notification_host::NotificationHost;
pub use pagination_bar::PaginationBar;
pub use signup_form::SignupForm;
pub use specialists_page::SpecialistsPage;
pub use table_status_row::{LoadState, TableStatusRow};
pub use thumbnail::Thumbnail;
pub use users_page::UsersPage;

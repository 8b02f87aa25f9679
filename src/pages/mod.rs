//! Pages
//!
//! One component per route.

mod customer_feedback;
mod customer_menu;
mod daily_menu;
mod dashboard;
mod feedback;
mod login;
mod menu_management;
mod not_found;
mod order_tracking;
mod orders;
mod qr_codes;
mod register;
mod reports;
mod settings;

pub use customer_feedback::CustomerFeedbackPage;
pub use customer_menu::CustomerMenuPage;
pub use daily_menu::DailyMenuPage;
pub use dashboard::DashboardPage;
pub use feedback::FeedbackAdminPage;
pub use login::LoginPage;
pub use menu_management::MenuManagementPage;
pub use not_found::NotFoundPage;
pub use order_tracking::OrderTrackingPage;
pub use orders::OrdersPage;
pub use qr_codes::QrCodesPage;
pub use register::RegisterPage;
pub use reports::ReportsPage;
pub use settings::SettingsPage;

//! UI Components
//!
//! Reusable Leptos components.

mod admin_layout;
mod delete_confirm_button;
mod flash;
mod modal;
mod navbar;
mod pagination;
mod sidebar;
mod star_rating;

pub use admin_layout::AdminLayout;
pub use delete_confirm_button::DeleteConfirmButton;
pub use flash::{Flash, FlashBanner};
pub use modal::Modal;
pub use navbar::{LanguageSelect, Navbar};
pub use pagination::Pager;
pub use sidebar::Sidebar;
pub use star_rating::{StarRating, Stars};

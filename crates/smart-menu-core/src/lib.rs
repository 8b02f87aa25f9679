//! Smart Menu Core
//!
//! Target-independent logic shared by the browser app: resource view models,
//! the customer cart, form validation, list filtering and paging, reports,
//! display formatting and translations.

pub mod cart;
pub mod config;
pub mod device;
pub mod domain;
pub mod filter;
pub mod format;
pub mod i18n;
pub mod pagination;
pub mod report;
pub mod validation;

pub use cart::{Cart, CartLine};
pub use i18n::{translate, Language};
pub use validation::ValidationError;

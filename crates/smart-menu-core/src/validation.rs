//! Form Validation
//!
//! Client-side checks run before a request is sent. Every error maps to an
//! i18n key so the page can show it in the user's language.

use chrono::NaiveDate;
use thiserror::Error;

use crate::cart::Cart;
use crate::domain::{
    CreateTableRequest, DailyMenuEntry, DailyMenuPayload, MenuItem, MenuItemPayload,
    RegisterRequest,
};

/// Largest accepted image upload
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
pub const MAX_TABLE_NUMBER_CHARS: usize = 50;
pub const MAX_LOCATION_CHARS: usize = 100;
pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MAX_PASSWORD_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Price must be greater than 0")]
    PriceNotPositive,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Stock must be a whole number")]
    StockInvalid,
    #[error("File size must be less than 2MB")]
    FileTooLarge,
    #[error("Please upload an image file (JPEG, PNG)")]
    InvalidFileType,
    #[error("Menu item is required")]
    MenuItemRequired,
    #[error("Special price cannot be negative")]
    SpecialPriceInvalid,
    #[error("Table number is required")]
    TableNumberRequired,
    #[error("Table number cannot exceed 50 characters")]
    TableNumberTooLong,
    #[error("Location cannot exceed 100 characters")]
    LocationTooLong,
    #[error("Username and password are required")]
    CredentialsRequired,
    #[error("Username must be 3-20 characters")]
    UsernameLength,
    #[error("Email must be valid")]
    InvalidEmail,
    #[error("Password must be 6-40 characters")]
    PasswordLength,
    #[error("New passwords do not match")]
    PasswordMismatch,
    #[error("Please select a rating")]
    RatingRequired,
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("Please enter your name to place an order")]
    CustomerNameRequired,
    #[error("Percentages must be between 0 and 100")]
    PercentOutOfRange,
    #[error("Please log in again")]
    SessionRequired,
}

impl ValidationError {
    /// i18n key of the user-facing message
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "nameRequired",
            ValidationError::PriceNotPositive => "priceRequired",
            ValidationError::CategoryRequired => "categoryRequired",
            ValidationError::StockInvalid => "stockInvalid",
            ValidationError::FileTooLarge => "fileTooLarge",
            ValidationError::InvalidFileType => "invalidFileType",
            ValidationError::MenuItemRequired => "menuItemRequired",
            ValidationError::SpecialPriceInvalid => "specialPriceInvalid",
            ValidationError::TableNumberRequired => "tableNumberRequired",
            ValidationError::TableNumberTooLong => "tableNumberTooLong",
            ValidationError::LocationTooLong => "locationTooLong",
            ValidationError::CredentialsRequired => "credentialsRequired",
            ValidationError::UsernameLength => "usernameLength",
            ValidationError::InvalidEmail => "invalidEmail",
            ValidationError::PasswordLength => "passwordLength",
            ValidationError::PasswordMismatch => "passwordMismatch",
            ValidationError::RatingRequired => "ratingRequired",
            ValidationError::EmptyCart => "cartEmpty",
            ValidationError::CustomerNameRequired => "customerNameRequired",
            ValidationError::PercentOutOfRange => "percentOutOfRange",
            ValidationError::SessionRequired => "sessionRequired",
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ========================
// Menu Items
// ========================

/// Raw state of the add/edit menu item modal.
///
/// `PUT /menu-items/{id}` replaces every field, so the form carries the
/// item's photo, allergens, prep time and featured flag even though the
/// modal does not edit all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemForm {
    /// `Some` when editing an existing item
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub available: bool,
    /// Current photo: the stored URL, or the data URL of a new upload
    pub image: Option<String>,
    pub allergens: Vec<String>,
    pub prep_time_minutes: Option<u32>,
    pub featured: bool,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            stock: "0".to_string(),
            available: true,
            image: None,
            allergens: Vec::new(),
            prep_time_minutes: None,
            featured: false,
        }
    }
}

impl MenuItemForm {
    /// Form pre-filled for editing `item`
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            category: item.category.clone().unwrap_or_default(),
            stock: item.stock.unwrap_or(0).to_string(),
            available: item.available,
            image: item.image_url.clone().filter(|url| !url.is_empty()),
            allergens: item.allergens.clone(),
            prep_time_minutes: item.prep_time_minutes,
            featured: item.featured,
        }
    }

    /// Form for a new item duplicated from `item`
    pub fn copy_of(item: &MenuItem) -> Self {
        Self {
            id: None,
            name: format!("{} (Copy)", item.name),
            ..Self::from_item(item)
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the owner, then name, then price, then category
    pub fn validate(&self, user_id: &str) -> Result<MenuItemPayload, ValidationError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ValidationError::SessionRequired);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let price = parse_amount(&self.price)
            .filter(|p| *p > 0.0)
            .ok_or(ValidationError::PriceNotPositive)?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::CategoryRequired);
        }
        let stock = match self.stock.trim() {
            "" => None,
            s => Some(s.parse::<u32>().map_err(|_| ValidationError::StockInvalid)?),
        };
        let description = self.description.trim();

        Ok(MenuItemPayload {
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price,
            category: category.to_string(),
            image_url: self.image.clone(),
            available: self.available,
            allergens: self.allergens.clone(),
            prep_time_minutes: self.prep_time_minutes,
            featured: self.featured,
            stock,
        })
    }
}

/// Checks an upload before it is read: size first, then MIME type
pub fn validate_image(size_bytes: u64, mime_type: &str) -> Result<(), ValidationError> {
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    if !mime_type.starts_with("image/") {
        return Err(ValidationError::InvalidFileType);
    }
    Ok(())
}

// ========================
// Daily Menu
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct DailyMenuForm {
    pub id: Option<String>,
    pub menu_item_id: String,
    pub special_price: String,
    pub available: bool,
}

impl Default for DailyMenuForm {
    fn default() -> Self {
        Self {
            id: None,
            menu_item_id: String::new(),
            special_price: String::new(),
            available: true,
        }
    }
}

impl DailyMenuForm {
    /// Form pre-filled for editing `entry`
    pub fn from_entry(entry: &DailyMenuEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            menu_item_id: entry.menu_item_id.clone(),
            special_price: entry.special_price.map(|p| p.to_string()).unwrap_or_default(),
            available: entry.available,
        }
    }

    pub fn validate(&self, date: NaiveDate) -> Result<DailyMenuPayload, ValidationError> {
        let menu_item_id = self.menu_item_id.trim();
        if menu_item_id.is_empty() {
            return Err(ValidationError::MenuItemRequired);
        }
        let special_price = match self.special_price.trim() {
            "" => None,
            raw => Some(
                parse_amount(raw)
                    .filter(|p| *p >= 0.0)
                    .ok_or(ValidationError::SpecialPriceInvalid)?,
            ),
        };
        Ok(DailyMenuPayload {
            menu_item_id: menu_item_id.to_string(),
            date,
            special_price,
            available: self.available,
        })
    }
}

// ========================
// Tables
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableForm {
    pub table_number: String,
    pub is_room: bool,
    pub location: String,
}

impl TableForm {
    /// Collects every problem instead of stopping at the first
    pub fn validate(&self) -> Result<CreateTableRequest, Vec<ValidationError>> {
        let table_number = self.table_number.trim();
        let location = self.location.trim();
        let mut errors = Vec::new();
        if table_number.is_empty() {
            errors.push(ValidationError::TableNumberRequired);
        }
        if table_number.chars().count() > MAX_TABLE_NUMBER_CHARS {
            errors.push(ValidationError::TableNumberTooLong);
        }
        if location.chars().count() > MAX_LOCATION_CHARS {
            errors.push(ValidationError::LocationTooLong);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateTableRequest {
            table_number: table_number.to_string(),
            is_room: self.is_room,
            location: location.to_string(),
        })
    }
}

// ========================
// Accounts
// ========================

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::CredentialsRequired);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub restaurant_name: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = self.username.trim();
        if !(3..=20).contains(&username.chars().count()) {
            return Err(ValidationError::UsernameLength);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        let len = self.password.chars().count();
        if !(MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&len) {
            return Err(ValidationError::PasswordLength);
        }
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Ok(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            full_name: optional(&self.full_name),
            restaurant_name: optional(&self.restaurant_name),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Result of checking the profile tab's password fields. Nothing is sent:
/// the backend has no password endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    /// New password left empty
    Unchanged,
    /// Passwords match and meet the length rule
    Acceptable,
}

impl PasswordCheck {
    /// i18n key of the notice shown after the check
    pub fn notice_key(&self) -> &'static str {
        match self {
            PasswordCheck::Unchanged => "noPasswordChange",
            PasswordCheck::Acceptable => "passwordValidated",
        }
    }
}

/// Checks the optional password change on the profile tab.
/// An empty new password means "keep the current one".
pub fn validate_password_change(
    new_password: &str,
    confirm: &str,
) -> Result<PasswordCheck, ValidationError> {
    if new_password.is_empty() {
        return Ok(PasswordCheck::Unchanged);
    }
    if new_password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if new_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordLength);
    }
    Ok(PasswordCheck::Acceptable)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label_key(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "passwordWeak",
            PasswordStrength::Medium => "passwordMedium",
            PasswordStrength::Strong => "passwordStrong",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

/// One point each for length >= 8, mixed case, a digit and a symbol.
/// `None` for an empty password.
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    if has_lower && password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    Some(match score {
        0 | 1 => PasswordStrength::Weak,
        2 | 3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    })
}

// ========================
// Customer Flow
// ========================

pub fn validate_rating(rating: u8) -> Result<u8, ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::RatingRequired)
    }
}

/// Returns the trimmed customer name when the order can be placed
pub fn validate_checkout(cart: &Cart, customer_name: &str) -> Result<String, ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    let name = customer_name.trim();
    if name.is_empty() {
        return Err(ValidationError::CustomerNameRequired);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> MenuItemForm {
        MenuItemForm {
            name: "Ugali & Fish".into(),
            price: "15000".into(),
            category: "main".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_menu_form_rejects_empty_name() {
        let form = MenuItemForm { name: "   ".into(), ..valid_form() };
        assert_eq!(form.validate("u1"), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_menu_form_rejects_non_positive_price() {
        for price in ["", "0", "-5", "abc", "NaN"] {
            let form = MenuItemForm { price: price.into(), ..valid_form() };
            assert_eq!(form.validate("u1"), Err(ValidationError::PriceNotPositive), "price {:?}", price);
        }
    }

    #[test]
    fn test_menu_form_rejects_missing_category() {
        let form = MenuItemForm { category: String::new(), ..valid_form() };
        assert_eq!(form.validate("u1"), Err(ValidationError::CategoryRequired));
    }

    #[test]
    fn test_menu_form_checks_name_before_price() {
        let form = MenuItemForm {
            name: String::new(),
            price: "0".into(),
            category: String::new(),
            ..Default::default()
        };
        assert_eq!(form.validate("u1"), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_menu_form_builds_payload() {
        let form = MenuItemForm {
            description: "  ".into(),
            stock: "50".into(),
            ..valid_form()
        };
        let payload = form.validate("u1").unwrap();
        assert_eq!(payload.user_id, "u1");
        assert_eq!(payload.price, 15000.0);
        assert_eq!(payload.description, None);
        assert_eq!(payload.stock, Some(50));
        assert!(payload.available);
    }

    #[test]
    fn test_menu_form_requires_owner() {
        assert_eq!(valid_form().validate("  "), Err(ValidationError::SessionRequired));
    }

    #[test]
    fn test_edit_keeps_fields_the_modal_does_not_show() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":"m1","userId":"u1","name":"Pilau","price":10000,"category":"main",
                "imageUrl":"https://cdn.test/pilau.jpg","allergens":["nuts"],
                "prepTimeMinutes":25,"featured":true,"available":true}"#,
        )
        .unwrap();
        let payload = MenuItemForm::from_item(&item).validate("u1").unwrap();
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body["userId"], "u1");
        assert_eq!(body["imageUrl"], "https://cdn.test/pilau.jpg");
        assert_eq!(body["allergens"], serde_json::json!(["nuts"]));
        assert_eq!(body["prepTimeMinutes"], 25);
        assert_eq!(body["featured"], true);
    }

    #[test]
    fn test_new_upload_replaces_stored_photo() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":"m1","name":"Pilau","price":10000,"category":"main","imageUrl":"https://cdn.test/old.jpg"}"#,
        )
        .unwrap();
        let mut form = MenuItemForm::from_item(&item);
        form.image = Some("data:image/png;base64,AAA".into());
        let payload = form.validate("u1").unwrap();
        assert_eq!(payload.image_url.as_deref(), Some("data:image/png;base64,AAA"));
    }

    #[test]
    fn test_copy_of_appends_suffix_and_clears_id() {
        let item: MenuItem = serde_json::from_str(r#"{"id":"m1","name":"Chips Mayai","price":6000,"category":"main"}"#).unwrap();
        let copy = MenuItemForm::copy_of(&item);
        assert_eq!(copy.name, "Chips Mayai (Copy)");
        assert!(!copy.is_edit());
        assert!(MenuItemForm::from_item(&item).is_edit());
    }

    #[test]
    fn test_image_validation() {
        assert_eq!(validate_image(MAX_IMAGE_BYTES, "image/png"), Ok(()));
        assert_eq!(validate_image(MAX_IMAGE_BYTES + 1, "image/png"), Err(ValidationError::FileTooLarge));
        assert_eq!(validate_image(1024, "application/pdf"), Err(ValidationError::InvalidFileType));
        assert_eq!(validate_image(MAX_IMAGE_BYTES + 1, "text/plain"), Err(ValidationError::FileTooLarge));
    }

    #[test]
    fn test_daily_menu_form() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        assert_eq!(DailyMenuForm::default().validate(date), Err(ValidationError::MenuItemRequired));

        let form = DailyMenuForm {
            menu_item_id: "m1".into(),
            special_price: "-1".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(date), Err(ValidationError::SpecialPriceInvalid));

        let form = DailyMenuForm { special_price: "".into(), ..form };
        assert_eq!(form.validate(date).unwrap().special_price, None);

        let form = DailyMenuForm { special_price: "13000".into(), ..form };
        assert_eq!(form.validate(date).unwrap().special_price, Some(13000.0));
    }

    #[test]
    fn test_daily_menu_form_from_entry() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        let entry = DailyMenuEntry {
            id: "d1".into(),
            menu_item_id: "m1".into(),
            item_name: "Pilau".into(),
            category: None,
            original_price: 15000.0,
            special_price: Some(12500.0),
            available: false,
            image_url: None,
            date,
        };
        let form = DailyMenuForm::from_entry(&entry);
        assert_eq!(form.id.as_deref(), Some("d1"));
        assert_eq!(form.special_price, "12500");
        assert!(!form.available);

        let payload = form.validate(date).unwrap();
        assert_eq!(payload.special_price, Some(12500.0));
        assert!(!payload.available);
    }

    #[test]
    fn test_table_form_collects_errors() {
        let form = TableForm {
            table_number: " ".into(),
            is_room: false,
            location: "x".repeat(101),
        };
        assert_eq!(
            form.validate(),
            Err(vec![ValidationError::TableNumberRequired, ValidationError::LocationTooLong])
        );

        let form = TableForm {
            table_number: "T".repeat(51),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(vec![ValidationError::TableNumberTooLong]));

        let form = TableForm {
            table_number: "  Patio A ".into(),
            is_room: true,
            location: "Garden".into(),
        };
        let req = form.validate().unwrap();
        assert_eq!(req.table_number, "Patio A");
        assert!(req.is_room);
    }

    #[test]
    fn test_register_form() {
        let good = RegisterForm {
            username: "mama_lishe".into(),
            email: "owner@example.com".into(),
            password: "secret1".into(),
            ..Default::default()
        };
        assert!(good.validate().is_ok());
        assert_eq!(
            RegisterForm { username: "ab".into(), ..good.clone() }.validate().unwrap_err(),
            ValidationError::UsernameLength
        );
        assert_eq!(
            RegisterForm { email: "owner@example".into(), ..good.clone() }.validate().unwrap_err(),
            ValidationError::InvalidEmail
        );
        assert_eq!(
            RegisterForm { password: "12345".into(), ..good }.validate().unwrap_err(),
            ValidationError::PasswordLength
        );
    }

    #[test]
    fn test_password_change() {
        assert_eq!(validate_password_change("", "anything"), Ok(PasswordCheck::Unchanged));
        assert_eq!(validate_password_change("abcdef", "abcdeg"), Err(ValidationError::PasswordMismatch));
        assert_eq!(validate_password_change("abc", "abc"), Err(ValidationError::PasswordLength));
        assert_eq!(validate_password_change("abcdef", "abcdef"), Ok(PasswordCheck::Acceptable));
    }

    #[test]
    fn test_password_notices_do_not_claim_a_save() {
        assert_eq!(PasswordCheck::Acceptable.notice_key(), "passwordValidated");
        assert_eq!(PasswordCheck::Unchanged.notice_key(), "noPasswordChange");
        for check in [PasswordCheck::Acceptable, PasswordCheck::Unchanged] {
            assert!(crate::i18n::keys().any(|k| k == check.notice_key()));
        }
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength(""), None);
        assert_eq!(password_strength("abc"), Some(PasswordStrength::Weak));
        assert_eq!(password_strength("abcdefgh1"), Some(PasswordStrength::Medium));
        assert_eq!(password_strength("Abcdefg1!"), Some(PasswordStrength::Strong));
    }

    #[test]
    fn test_rating_and_checkout() {
        assert_eq!(validate_rating(0), Err(ValidationError::RatingRequired));
        assert_eq!(validate_rating(6), Err(ValidationError::RatingRequired));
        assert_eq!(validate_rating(4), Ok(4));

        let mut cart = Cart::new();
        assert_eq!(validate_checkout(&cart, "Asha"), Err(ValidationError::EmptyCart));
        let item: MenuItem = serde_json::from_str(r#"{"id":"m1","name":"Rice","price":2000}"#).unwrap();
        cart.add(&item, 1, "");
        assert_eq!(validate_checkout(&cart, "  "), Err(ValidationError::CustomerNameRequired));
        assert_eq!(validate_checkout(&cart, " Asha "), Ok("Asha".to_string()));
    }

    #[test]
    fn test_every_error_has_a_key() {
        assert_eq!(ValidationError::PriceNotPositive.key(), "priceRequired");
        assert_eq!(ValidationError::FileTooLarge.to_string(), "File size must be less than 2MB");
    }
}

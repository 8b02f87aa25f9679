//! Display Formatting
//!
//! Amounts, ratings, timestamps and the URLs printed on table QR codes.

use chrono::NaiveDateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a query component, matching `encodeURIComponent`
pub const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one query parameter value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

pub const CURRENCY: &str = "TSH";

const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const QR_IMAGE_SIZE: u32 = 200;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Groups thousands and prints exactly `decimals` fraction digits
fn format_fixed(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut out = String::new();
    if amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `15000.0` → `15,000`; up to two decimals, trailing zeros dropped
pub fn format_amount(amount: f64) -> String {
    let s = format_fixed(amount, 2);
    match s.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        }
        None => s,
    }
}

/// `15000.0` → `15,000 TSH`
pub fn format_price(amount: f64) -> String {
    format!("{} {}", format_amount(amount), CURRENCY)
}

/// Always two decimals, for dashboard totals: `1,250,000.50 TSH`
pub fn format_currency(amount: f64) -> String {
    format!("{} {}", format_fixed(amount, 2), CURRENCY)
}

/// `3` → `★★★☆☆`. Ratings above five are capped.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `09:30 AM`, or `-` when the timestamp is missing
pub fn format_time(at: Option<NaiveDateTime>) -> String {
    at.map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Timestamp rendered with the user's date and clock preferences
/// (`DD/MM/YYYY`, `MM/DD/YYYY` or `YYYY-MM-DD`; `12h` or `24h`).
pub fn format_datetime_with(
    at: Option<NaiveDateTime>,
    date_format: &str,
    time_format: &str,
) -> String {
    let Some(t) = at else {
        return "-".to_string();
    };
    let date = match date_format {
        "MM/DD/YYYY" => "%m/%d/%Y",
        "YYYY-MM-DD" => "%Y-%m-%d",
        _ => "%d/%m/%Y",
    };
    let time = if time_format == "12h" { "%I:%M %p" } else { "%H:%M" };
    t.format(&format!("{} {}", date, time)).to_string()
}

/// Link a table's QR code points at
pub fn customer_menu_url(origin: &str, table_id: &str) -> String {
    format!(
        "{}/customer-menu?table={}",
        origin.trim_end_matches('/'),
        encode_component(table_id)
    )
}

/// Image URL of the QR code that encodes `data`
pub fn qr_code_image_url(data: &str) -> String {
    format!(
        "{}?size={}x{}&data={}",
        QR_SERVICE_URL,
        QR_IMAGE_SIZE,
        QR_IMAGE_SIZE,
        encode_component(data)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()
    }

    #[test]
    fn test_amounts() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(15000.0), "15,000");
        assert_eq!(format_amount(1250000.5), "1,250,000.5");
        assert_eq!(format_amount(-4500.0), "-4,500");
        assert_eq!(format_price(15000.0), "15,000 TSH");
        assert_eq!(format_currency(1250000.0), "1,250,000.00 TSH");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_datetimes() {
        assert_eq!(format_time(None), "-");
        assert_eq!(format_time(at("2024-11-20 09:30")), "09:30 AM");
        assert_eq!(format_datetime_with(at("2024-11-20 14:05"), "YYYY-MM-DD", "24h"), "2024-11-20 14:05");
        assert_eq!(format_datetime_with(at("2024-11-20 14:05"), "DD/MM/YYYY", "12h"), "20/11/2024 02:05 PM");
        assert_eq!(format_datetime_with(at("2024-11-20 14:05"), "MM/DD/YYYY", "24h"), "11/20/2024 14:05");
        assert_eq!(format_datetime_with(None, "YYYY-MM-DD", "24h"), "-");
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("ORD-20241120 #1"), "ORD-20241120%20%231");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            customer_menu_url("https://menu.example.com/", "t-1"),
            "https://menu.example.com/customer-menu?table=t-1"
        );
        assert_eq!(
            qr_code_image_url("https://a.b/c?table=1"),
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fa.b%2Fc%3Ftable%3D1"
        );
    }
}

//! Device identifier used to recognise a returning customer browser.

const SUFFIX_LEN: usize = 9;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `device-<now_ms>-<9 base36 chars>`, the suffix taken from the
/// fractional expansion of `random` (expected in `[0, 1)`).
pub fn generate_device_id(now_ms: u64, random: f64) -> String {
    let mut x = if random.is_finite() { random.abs().fract() } else { 0.0 };
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        x *= 36.0;
        let digit = (x.floor() as usize).min(35);
        x -= digit as f64;
        suffix.push(DIGITS[digit] as char);
    }
    format!("device-{}-{}", now_ms, suffix)
}

/// Whether `id` has the shape produced by [`generate_device_id`]
pub fn is_device_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("device-") else {
        return false;
    };
    match rest.split_once('-') {
        Some((ms, suffix)) => {
            !ms.is_empty()
                && ms.bytes().all(|b| b.is_ascii_digit())
                && suffix.len() == SUFFIX_LEN
                && suffix.bytes().all(|b| DIGITS.contains(&b))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_id_shape() {
        let id = generate_device_id(1_700_000_000_000, 0.123456789);
        assert!(id.starts_with("device-1700000000000-"));
        assert!(is_device_id(&id), "{}", id);
    }

    #[test]
    fn test_device_id_edge_randoms() {
        assert_eq!(generate_device_id(5, 0.0), "device-5-000000000");
        assert!(is_device_id(&generate_device_id(5, 0.999_999_999_999)));
        assert!(is_device_id(&generate_device_id(5, f64::NAN)));
    }

    #[test]
    fn test_rejects_foreign_ids() {
        assert!(!is_device_id("abc"));
        assert!(!is_device_id("device-12-short"));
        assert!(!is_device_id("device-x1-abcdefghi"));
    }
}

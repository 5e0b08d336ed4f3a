use md5::{Digest, Md5};
use rust_decimal::Decimal;

/// Uppercase hex MD5, the primitive both PayHere signatures are built from.
fn md5_upper(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize()).to_uppercase()
}

/// PayHere requires amounts formatted to exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

pub fn order_reference(booking_id: i32) -> String {
    format!("BK-{}", booking_id)
}

pub fn parse_order_reference(order_id: &str) -> Option<i32> {
    order_id.strip_prefix("BK-")?.parse().ok()
}

/// Checkout hash per the PayHere merchant documentation:
/// `upper(md5(merchant_id + order_id + amount + currency + upper(md5(secret))))`.
/// Field order, uppercasing and the two-decimal amount are all significant.
pub fn checkout_hash(
    merchant_id: &str,
    order_id: &str,
    amount: &str,
    currency: &str,
    merchant_secret: &str,
) -> String {
    let hashed_secret = md5_upper(merchant_secret);
    md5_upper(&format!(
        "{}{}{}{}{}",
        merchant_id, order_id, amount, currency, hashed_secret
    ))
}

/// Expected `md5sig` of an inbound payment notification. The gateway signs
/// the callback with the merchant secret; notifications whose signature does
/// not match must be rejected before any state is touched.
pub fn notify_signature(
    merchant_id: &str,
    order_id: &str,
    payhere_amount: &str,
    payhere_currency: &str,
    status_code: &str,
    merchant_secret: &str,
) -> String {
    let hashed_secret = md5_upper(merchant_secret);
    md5_upper(&format!(
        "{}{}{}{}{}{}",
        merchant_id, order_id, payhere_amount, payhere_currency, status_code, hashed_secret
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_checkout_hash_deterministic() {
        let a = checkout_hash("1211149", "BK-42", "15000.00", "LKR", "secret");
        let b = checkout_hash("1211149", "BK-42", "15000.00", "LKR", "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_checkout_hash_every_field_matters() {
        let base = checkout_hash("1211149", "BK-42", "15000.00", "LKR", "secret");
        assert_ne!(base, checkout_hash("1211150", "BK-42", "15000.00", "LKR", "secret"));
        assert_ne!(base, checkout_hash("1211149", "BK-43", "15000.00", "LKR", "secret"));
        assert_ne!(base, checkout_hash("1211149", "BK-42", "15000.01", "LKR", "secret"));
        assert_ne!(base, checkout_hash("1211149", "BK-42", "15000.00", "USD", "secret"));
        assert_ne!(base, checkout_hash("1211149", "BK-42", "15000.00", "LKR", "other"));
    }

    #[test]
    fn test_notify_signature_status_code_matters() {
        let ok = notify_signature("1211149", "BK-42", "15000.00", "LKR", "2", "secret");
        let failed = notify_signature("1211149", "BK-42", "15000.00", "LKR", "-2", "secret");
        assert_ne!(ok, failed);
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(Decimal::from_str("15000").unwrap()), "15000.00");
        assert_eq!(format_amount(Decimal::from_str("99.9").unwrap()), "99.90");
        assert_eq!(format_amount(Decimal::from_str("12.34").unwrap()), "12.34");
    }

    #[test]
    fn test_order_reference_round_trip() {
        assert_eq!(order_reference(42), "BK-42");
        assert_eq!(parse_order_reference("BK-42"), Some(42));
        assert_eq!(parse_order_reference("BK-"), None);
        assert_eq!(parse_order_reference("XX-42"), None);
        assert_eq!(parse_order_reference("42"), None);
    }
}

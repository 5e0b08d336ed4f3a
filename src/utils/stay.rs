use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// A stay covers at least one night. Same-day in/out has nothing to bill
/// and nothing to occupy, so it is rejected along with reversed ranges.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<()> {
    if check_in >= check_out {
        return Err(AppError::BadRequest(
            "check_out must be after check_in".to_string(),
        ));
    }
    Ok(())
}

/// Half-open interval overlap: `[a_in, a_out)` and `[b_in, b_out)` collide
/// when each starts before the other ends. Back-to-back stays (one checking
/// out the day the other checks in) do not overlap.
pub fn intervals_overlap(
    a_in: NaiveDate,
    a_out: NaiveDate,
    b_in: NaiveDate,
    b_out: NaiveDate,
) -> bool {
    a_in < b_out && a_out > b_in
}

/// Friday and Saturday nights bill at the weekend rate.
fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Total price for a stay: one night per date in `[check_in, check_out)`,
/// each billed at the weekday or weekend rate. Caller guarantees
/// `check_in < check_out`.
pub fn stay_total(
    price_weekday: Decimal,
    price_weekend: Decimal,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Decimal {
    check_in
        .iter_days()
        .take_while(|night| *night < check_out)
        .map(|night| {
            if is_weekend_night(night) {
                price_weekend
            } else {
                price_weekday
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_validate_stay_rejects_empty_range() {
        assert!(validate_stay(d("2024-06-01"), d("2024-06-02")).is_ok());
        // Same-day in/out is an empty stay.
        assert!(validate_stay(d("2024-06-01"), d("2024-06-01")).is_err());
        assert!(validate_stay(d("2024-06-02"), d("2024-06-01")).is_err());
    }

    #[test]
    fn test_overlap_half_open() {
        // Existing stay 06-01..06-05, request 06-04..06-08: the night of
        // 06-04 is shared, so they overlap.
        assert!(intervals_overlap(d("2024-06-01"), d("2024-06-05"), d("2024-06-04"), d("2024-06-08")));
        // Checkout day equals check-in day: no shared night.
        assert!(!intervals_overlap(d("2024-06-01"), d("2024-06-05"), d("2024-06-05"), d("2024-06-08")));
        assert!(!intervals_overlap(d("2024-06-05"), d("2024-06-08"), d("2024-06-01"), d("2024-06-05")));
        // Containment overlaps.
        assert!(intervals_overlap(d("2024-06-01"), d("2024-06-10"), d("2024-06-03"), d("2024-06-04")));
    }

    #[test]
    fn test_stay_total_weekday_only() {
        // Mon 2024-06-03 .. Thu 2024-06-06: three weekday nights.
        let total = stay_total(Decimal::from(100), Decimal::from(150), d("2024-06-03"), d("2024-06-06"));
        assert_eq!(total, Decimal::from(300));
    }

    #[test]
    fn test_stay_total_weekend_rates() {
        // Thu 2024-06-06 .. Sun 2024-06-09: Thu weekday, Fri + Sat weekend.
        let total = stay_total(Decimal::from(100), Decimal::from(150), d("2024-06-06"), d("2024-06-09"));
        assert_eq!(total, Decimal::from(400));
    }

    #[test]
    fn test_stay_total_single_night() {
        let total = stay_total(Decimal::from(100), Decimal::from(150), d("2024-06-07"), d("2024-06-08"));
        // Friday night bills at the weekend rate.
        assert_eq!(total, Decimal::from(150));
    }
}

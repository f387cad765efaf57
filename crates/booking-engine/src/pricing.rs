//! Stay pricing.
//!
//! The total a guest pays is computed exactly once, at booking submission, and
//! frozen into the record. Two billing rules exist:
//!
//! * daytour cottages charge the flat base price regardless of duration;
//! * overnight units charge base price per started 24-hour block, with a
//!   one-night minimum, so any stay up to 24 hours bills as one night.
//!
//! Pricing is a pure function of its inputs; the same request always yields
//! the same total.

use crate::model::RoomCategory;
use chrono::NaiveDateTime;
use thiserror::Error;

const SECONDS_PER_NIGHT: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Check-out does not fall strictly after check-in.
    #[error("check-out must be after check-in")]
    InvalidDateRange,
}

/// Computes the locked-in total for a stay, in whole currency units.
pub fn compute_total(
    category: RoomCategory,
    base_price: u64,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
) -> Result<u64, PricingError> {
    let secs = check_out.signed_duration_since(check_in).num_seconds();
    if secs <= 0 {
        return Err(PricingError::InvalidDateRange);
    }

    match category {
        RoomCategory::DaytourCottage => Ok(base_price),
        RoomCategory::StandardOvernight | RoomCategory::VillaOvernight => {
            let nights = (secs as u64).div_ceil(SECONDS_PER_NIGHT);
            Ok(base_price * nights)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn daytour_cottage_is_flat_rate() {
        let total = compute_total(RoomCategory::DaytourCottage, 1_200, at(1, 8), at(1, 17));
        assert_eq!(total, Ok(1_200));

        // Duration never matters for a cottage.
        let long = compute_total(RoomCategory::DaytourCottage, 1_200, at(1, 8), at(4, 17));
        assert_eq!(long, Ok(1_200));
    }

    #[test]
    fn short_overnight_stay_bills_one_night() {
        // 22 hours at 3500/night.
        let total = compute_total(RoomCategory::StandardOvernight, 3_500, at(1, 14), at(2, 12));
        assert_eq!(total, Ok(3_500));
    }

    #[test]
    fn partial_nights_round_up() {
        // 70 hours at 4000/night rounds up to 3 nights.
        let total = compute_total(RoomCategory::VillaOvernight, 4_000, at(1, 14), at(4, 12));
        assert_eq!(total, Ok(12_000));
    }

    #[test]
    fn exact_nights_do_not_round_up() {
        let one = compute_total(RoomCategory::StandardOvernight, 3_500, at(1, 14), at(2, 14));
        assert_eq!(one, Ok(3_500));

        let two = compute_total(RoomCategory::StandardOvernight, 3_500, at(1, 14), at(3, 14));
        assert_eq!(two, Ok(7_000));

        // One second past the boundary starts another night.
        let check_out = at(2, 14) + chrono::Duration::seconds(1);
        let over = compute_total(RoomCategory::StandardOvernight, 3_500, at(1, 14), check_out);
        assert_eq!(over, Ok(7_000));
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        let equal = compute_total(RoomCategory::StandardOvernight, 3_500, at(2, 14), at(2, 14));
        assert_eq!(equal, Err(PricingError::InvalidDateRange));

        let backwards = compute_total(RoomCategory::DaytourCottage, 1_200, at(3, 10), at(2, 10));
        assert_eq!(backwards, Err(PricingError::InvalidDateRange));
    }

    #[test]
    fn pricing_is_deterministic() {
        let args = (RoomCategory::VillaOvernight, 4_000, at(1, 14), at(4, 12));
        let first = compute_total(args.0, args.1, args.2, args.3);
        let second = compute_total(args.0, args.1, args.2, args.3);
        assert_eq!(first, second);
    }
}

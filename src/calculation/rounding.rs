//! Rounding and clamping policies.
//!
//! Every monetary figure the engine reports passes through one of these
//! functions, so the rules live in one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole rupee, halves away from zero.
///
/// Used for the earning components (Basic, HRA, gross basis).
///
/// # Example
///
/// ```
/// use salary_engine::calculation::round_rupee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_rupee(Decimal::from_str("18571.43").unwrap()), Decimal::from(18571));
/// assert_eq!(round_rupee(Decimal::from_str("3714.5").unwrap()), Decimal::from(3715));
/// ```
pub fn round_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to paise (two decimal places), halves away from zero.
///
/// Used for rates and the leave deduction.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::round_paise;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let per_day = Decimal::from(40_000) / Decimal::from(31);
/// assert_eq!(round_paise(per_day), Decimal::from_str("1290.32").unwrap());
/// ```
pub fn round_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative amounts to zero.
pub fn floor_at_zero(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

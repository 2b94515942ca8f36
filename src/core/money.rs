use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every billed amount carries
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to the billing precision (2 decimal places)
///
/// Midpoints round away from zero, so 0.125 becomes 0.13. The result is
/// always rescaled to exactly two fraction digits, which keeps serialized
/// amounts like "1.50" instead of "1.5".
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Converts a whole-number percentage (e.g. 1.29) to a rate (0.0129)
pub fn percent_to_rate(percentage: Decimal) -> Decimal {
    percentage / Decimal::ONE_HUNDRED
}

/// Returns true if the amount has no residue beyond two decimal places
pub fn is_whole_cents(amount: Decimal) -> bool {
    (amount * Decimal::ONE_HUNDRED).fract().is_zero()
}

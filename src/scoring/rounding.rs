use rust_decimal::{Decimal, RoundingStrategy};

/// Round half away from zero to one decimal place.
///
/// This is the only lossy operation in scoring and is applied to final
/// scores only, never to Impact, Exploitability or adjusted terms.
#[must_use]
pub fn round_to_1_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(round_to_1_decimal(dec!(4.25)), dec!(4.3));
        assert_eq!(round_to_1_decimal(dec!(4.35)), dec!(4.4));
        assert_eq!(round_to_1_decimal(dec!(-0.25)), dec!(-0.3));
        assert_eq!(round_to_1_decimal(dec!(4.2499999999)), dec!(4.2));
    }

    #[test]
    fn test_already_rounded() {
        assert_eq!(round_to_1_decimal(dec!(10)), dec!(10.0));
        assert_eq!(round_to_1_decimal(dec!(0)), dec!(0.0));
        assert_eq!(round_to_1_decimal(dec!(6.9)), dec!(6.9));
    }
}

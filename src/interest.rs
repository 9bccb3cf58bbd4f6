use crate::decimal::{Money, Rate};

/// interest accrued on `opening` over one month
///
/// A zero rate yields exactly zero rather than `balance * 0`. Returns `None`
/// when the product is not representable.
pub fn accrue_monthly(opening: Money, monthly_rate: Rate) -> Option<Money> {
    if monthly_rate.is_zero() {
        return Some(Money::ZERO);
    }
    opening.apply_rate(monthly_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_accrual() {
        let rate = Rate::from_percent(dec!(24)).monthly_rate();
        let interest = accrue_monthly(Money::from_major(1_000), rate).unwrap();
        assert_eq!(interest, Money::from_major(20));
    }

    #[test]
    fn test_zero_rate_is_exactly_zero() {
        let interest = accrue_monthly(Money::from_major(1_000), Rate::ZERO).unwrap();
        assert_eq!(interest, Money::ZERO);
        assert!(!interest.as_decimal().is_sign_negative());
    }

    #[test]
    fn test_accrual_overflow() {
        let huge = Money::from_decimal(Decimal::MAX);
        assert!(accrue_monthly(huge, Rate::from_decimal(dec!(2))).is_none());
    }
}

pub mod amortization;
pub mod level;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::types::{LoanParameters, RepaymentStrategy};

pub use amortization::{
    compute_schedule, AmortizationEngine, ScheduleEntry, ScheduleOutcome, ScheduleResult,
};
pub use level::level_payment;

/// per-month payment rule, resolved once from a strategy before the loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentRule {
    /// greater of `percent` of the opening balance and `floor`
    Percentage { percent: Decimal, floor: Money },
    /// the same amount every month
    Level(Money),
}

impl PaymentRule {
    /// resolve the rule for a strategy, `None` when no usable level payment exists
    pub fn resolve(
        params: &LoanParameters,
        strategy: &RepaymentStrategy,
        config: &EngineConfig,
    ) -> Option<Self> {
        match *strategy {
            RepaymentStrategy::MinimumPercentage { percent, .. } => Some(PaymentRule::Percentage {
                percent,
                floor: config.floor_payment,
            }),
            RepaymentStrategy::FixedPayment { amount } => Some(PaymentRule::Level(amount)),
            RepaymentStrategy::DesiredMonths { months } => {
                level_payment(params.starting_balance(), params.monthly_rate(), months)
                    .map(PaymentRule::Level)
            }
        }
    }

    /// payment due for a month opening at `opening`, `None` on overflow
    pub fn payment_for(&self, opening: Money) -> Option<Money> {
        match *self {
            PaymentRule::Percentage { percent, floor } => {
                Some(opening.percentage(percent)?.max(floor))
            }
            PaymentRule::Level(amount) => Some(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(balance: i64, rate: Decimal) -> LoanParameters {
        LoanParameters::new(Money::from_major(balance), rate).unwrap()
    }

    #[test]
    fn test_percentage_rule_applies_floor() {
        let rule = PaymentRule::resolve(
            &params(1_000, dec!(24)),
            &RepaymentStrategy::minimum_percentage(dec!(2), 360).unwrap(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rule.payment_for(Money::from_major(1_000)), Some(Money::from_major(20)));
        // 2% of 100 is 2, below the floor
        assert_eq!(rule.payment_for(Money::from_major(100)), Some(Money::from_major(5)));
    }

    #[test]
    fn test_fixed_rule_ignores_balance() {
        let rule = PaymentRule::resolve(
            &params(500, Decimal::ZERO),
            &RepaymentStrategy::fixed_payment(Money::from_major(100)).unwrap(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rule.payment_for(Money::from_major(500)), Some(Money::from_major(100)));
        assert_eq!(rule.payment_for(Money::from_major(30)), Some(Money::from_major(100)));
    }

    #[test]
    fn test_desired_months_rule_is_level_payment() {
        let rule = PaymentRule::resolve(
            &params(1_000, Decimal::ZERO),
            &RepaymentStrategy::desired_months(10).unwrap(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rule, PaymentRule::Level(Money::from_major(100)));
    }

    #[test]
    fn test_percentage_rule_overflow() {
        let rule = PaymentRule::Percentage {
            percent: dec!(50),
            floor: Money::from_major(5),
        };
        assert!(rule.payment_for(Money::from_decimal(Decimal::MAX)).is_some());
        let rule = PaymentRule::Percentage {
            percent: dec!(200),
            floor: Money::from_major(5),
        };
        assert!(rule.payment_for(Money::from_decimal(Decimal::MAX)).is_none());
    }
}

use credit_repayment_rs::{
    compute_schedule, Decimal, LoanParameters, Money, RepaymentStrategy, ScheduleOutcome,
    ScheduleResult,
};
use proptest::prelude::*;

fn money(cents: i64) -> Money {
    Money::from_decimal(Decimal::new(cents, 2))
}

fn params(balance_cents: i64, rate_bps: u32) -> LoanParameters {
    LoanParameters::new(money(balance_cents), Decimal::new(rate_bps as i64, 2)).unwrap()
}

fn any_strategy() -> impl Strategy<Value = RepaymentStrategy> {
    prop_oneof![
        (1u32..=2_500, 1u32..=600).prop_map(|(percent_bps, max_months)| {
            RepaymentStrategy::minimum_percentage(Decimal::new(percent_bps as i64, 2), max_months)
                .unwrap()
        }),
        (1i64..=500_000).prop_map(|cents| RepaymentStrategy::fixed_payment(money(cents)).unwrap()),
        (1u32..=600).prop_map(|months| RepaymentStrategy::desired_months(months).unwrap()),
    ]
}

fn assert_ledger_invariants(result: &ScheduleResult) {
    for (i, entry) in result.entries().iter().enumerate() {
        assert_eq!(entry.month, i as u32 + 1);
        assert!(!entry.opening_balance.is_negative());
        assert!(!entry.interest_accrued.is_negative());
        assert!(!entry.payment_made.is_negative());
        assert!(!entry.closing_balance.is_negative());
    }
    let sum: Money = result.entries().iter().map(|e| e.interest_accrued).sum();
    assert_eq!(result.total_interest_paid(), sum);
    assert_eq!(result.months_to_payoff() as usize, result.entries().len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_ledger_invariants_hold(
        balance in 100i64..10_000_000,
        rate in 0u32..6_000,
        strategy in any_strategy(),
    ) {
        let result = compute_schedule(params(balance, rate), strategy);
        assert_ledger_invariants(&result);
        if let Some(limit) = strategy.month_limit() {
            prop_assert!(result.months_to_payoff() <= limit);
        }
    }

    #[test]
    fn prop_minimum_payment_never_below_floor(
        balance in 100i64..1_000_000,
        rate in 0u32..4_000,
        percent_bps in 1u32..1_000,
        max_months in 1u32..400,
    ) {
        let strategy = RepaymentStrategy::minimum_percentage(
            Decimal::new(percent_bps as i64, 2),
            max_months,
        ).unwrap();
        let result = compute_schedule(params(balance, rate), strategy);

        prop_assert!(result.months_to_payoff() <= max_months);
        for entry in result.entries() {
            prop_assert!(entry.payment_made >= Money::from_major(5));
        }
    }

    #[test]
    fn prop_desired_months_zero_rate_is_even_split(
        balance in 100i64..10_000_000,
        months in 1u32..600,
    ) {
        let p = params(balance, 0);
        let result = compute_schedule(p, RepaymentStrategy::desired_months(months).unwrap());
        let expected = p.starting_balance() / Decimal::from(months);

        prop_assert_eq!(result.months_to_payoff(), months);
        prop_assert_eq!(result.total_interest_paid(), Money::ZERO);
        for entry in result.entries() {
            prop_assert_eq!(entry.payment_made, expected);
        }
    }

    #[test]
    fn prop_fixed_payment_above_interest_converges(
        balance in 100i64..10_000_000,
        rate in 100u32..4_000,
    ) {
        let p = params(balance, rate);
        let first_interest = p.starting_balance().apply_rate(p.monthly_rate()).unwrap();
        let step = p.starting_balance() / Decimal::from(100) + Money::from_major(1);
        let amount = first_interest + step;

        let result = compute_schedule(p, RepaymentStrategy::fixed_payment(amount).unwrap());

        prop_assert_eq!(result.outcome(), ScheduleOutcome::PaidOff);
        prop_assert_eq!(result.final_balance(), Money::ZERO);
        for pair in result.entries().windows(2) {
            prop_assert!(pair[1].opening_balance < pair[0].opening_balance);
        }
    }

    #[test]
    fn prop_fixed_payment_at_or_below_interest_does_not_converge(
        balance in 100i64..10_000_000,
        rate in 100u32..4_000,
        share in 1u32..=100,
    ) {
        let p = params(balance, rate);
        let first_interest = p.starting_balance().apply_rate(p.monthly_rate()).unwrap();
        let amount = first_interest * Decimal::new(share as i64, 2);
        prop_assume!(amount.is_positive());

        let result = compute_schedule(p, RepaymentStrategy::fixed_payment(amount).unwrap());

        prop_assert!(!result.is_converged());
        prop_assert!(result.months_to_payoff() <= 3_600);
        prop_assert!(result.final_balance() >= p.starting_balance());
    }

    #[test]
    fn prop_identical_inputs_identical_output(
        balance in 100i64..10_000_000,
        rate in 0u32..6_000,
        strategy in any_strategy(),
    ) {
        let p = params(balance, rate);
        prop_assert_eq!(compute_schedule(p, strategy), compute_schedule(p, strategy));
    }
}

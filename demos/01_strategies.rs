/// strategies - compare the three repayment strategies on one balance
use credit_repayment_rs::{
    compute_schedule, format_currency, DisplayConfig, LoanParameters, Money, RepaymentStrategy,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let display = DisplayConfig::default();
    let params = LoanParameters::new(Money::from_major(3_000), dec!(22.9))?;

    let strategies = [
        ("minimum 3%", RepaymentStrategy::minimum_percentage(dec!(3), 600)?),
        ("fixed £150", RepaymentStrategy::fixed_payment(Money::from_major(150))?),
        ("over 18 months", RepaymentStrategy::desired_months(18)?),
    ];

    println!("=== £3000 at 22.9% ===\n");
    for (label, strategy) in strategies {
        let result = compute_schedule(params, strategy);
        println!(
            "{:<16} {:>4} months, interest {}, total paid {} ({:?})",
            label,
            result.months_to_payoff(),
            format_currency(result.total_interest_paid(), &display),
            format_currency(result.total_paid(), &display),
            result.outcome(),
        );
    }

    Ok(())
}

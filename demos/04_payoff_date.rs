/// payoff date - project due dates with controlled time
use chrono::{TimeZone, Utc};
use credit_repayment_rs::{
    compute_schedule, LoanParameters, Money, PayoffProjection, RepaymentStrategy, SafeTimeProvider,
    TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
    ));

    let params = LoanParameters::new(Money::from_major(4_200), dec!(27.5))?;
    let strategy = RepaymentStrategy::fixed_payment(Money::from_major(200))?;
    let result = compute_schedule(params, strategy);
    let projection = PayoffProjection::project(&result, &time)?;

    println!("starting: {}", projection.start_date.format("%Y-%m-%d"));
    println!("payments: {}", projection.due_dates.len());
    match projection.payoff_date {
        Some(date) => println!("debt free: {}", date.format("%B %Y")),
        None => println!("balance is never cleared"),
    }

    Ok(())
}

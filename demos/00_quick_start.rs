/// quick start - minimal example to get started
use credit_repayment_rs::{
    compute_schedule, DisplayConfig, LoanParameters, Money, RepaymentStrategy, ScheduleReport,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // £1,500 card balance at 19.9%, paid off over two years
    let params = LoanParameters::new(Money::from_major(1_500), dec!(19.9))?;
    let strategy = RepaymentStrategy::desired_months(24)?;

    let result = compute_schedule(params, strategy);

    println!("{}", ScheduleReport::new(&result, &DisplayConfig::default()));

    Ok(())
}

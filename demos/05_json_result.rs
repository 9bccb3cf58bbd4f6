/// json result - serialize a schedule for another front end
use credit_repayment_rs::{compute_schedule, LoanParameters, Money, RepaymentStrategy};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LoanParameters::new(Money::from_major(600), dec!(12))?;
    let result = compute_schedule(params, RepaymentStrategy::desired_months(3)?);

    println!("{}", result.json());

    Ok(())
}

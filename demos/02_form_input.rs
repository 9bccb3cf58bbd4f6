/// form input - validate raw form values before calculating
use credit_repayment_rs::{CalculatorConfig, RepaymentError, RepaymentForm, ScheduleReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::default();

    // a form with mistakes is rejected field by field
    let bad = RepaymentForm::new("", "twenty").minimum("2", "");
    match bad.calculate(&config) {
        Err(RepaymentError::Validation(errors)) => {
            println!("form rejected:");
            for (field, message) in errors.iter() {
                println!("  {:<18} {}", field, message);
            }
        }
        other => println!("unexpected: {:?}", other.map(|r| r.months_to_payoff())),
    }

    // the same form submitted as json, corrected
    let good = RepaymentForm::from_json(
        r#"{
            "creditBalance": "850",
            "interestRate": "24.9",
            "mode": "fixed",
            "fixedPayment": "60"
        }"#,
    )?;
    let result = good.calculate(&config)?;
    println!("\n{}", ScheduleReport::new(&result, &config.display));

    Ok(())
}

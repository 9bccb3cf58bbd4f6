/// non-convergence - payments that never clear the balance
use credit_repayment_rs::{
    AmortizationEngine, CalculatorConfig, LoanParameters, Money, RepaymentStrategy, ScheduleReport,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init()?;

    let config = CalculatorConfig::default().with_iteration_cap(24);
    config.validate()?;
    let engine = AmortizationEngine::new(config.engine);

    // £2,000 at 18% accrues £30 a month, so £25 never gets ahead of it
    let params = LoanParameters::new(Money::from_major(2_000), dec!(18))?;
    let result = engine.compute(&params, &RepaymentStrategy::fixed_payment(Money::from_major(25))?);

    println!("{}", ScheduleReport::new(&result, &config.display));

    if let Err(e) = result.ensure_converged() {
        println!("\nerror: {}", e);
    }

    Ok(())
}

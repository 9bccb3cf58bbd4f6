pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod input;
pub mod interest;
pub mod payments;
pub mod report;
pub mod types;

// re-export key types
pub use calendar::PayoffProjection;
pub use config::{CalculatorConfig, DisplayConfig, EngineConfig};
pub use decimal::{Money, Rate};
pub use errors::{RepaymentError, Result};
pub use input::{FormField, RepaymentForm, ValidationErrors};
pub use payments::{
    compute_schedule, AmortizationEngine, PaymentRule, ScheduleEntry, ScheduleOutcome,
    ScheduleResult,
};
pub use report::{format_currency, ScheduleReport};
pub use types::{LoanParameters, RepaymentMode, RepaymentStrategy};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;

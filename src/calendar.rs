use chrono::{DateTime, Months, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::Serialize;

use crate::errors::{RepaymentError, Result};
use crate::payments::{ScheduleOutcome, ScheduleResult};
use crate::types::RepaymentStrategy;

/// calendar view of a schedule starting from the provider's current time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoffProjection {
    pub start_date: DateTime<Utc>,
    /// due date of each entry, first payment one month after start
    pub due_dates: Vec<DateTime<Utc>>,
    /// last due date, when the schedule clears the balance
    pub payoff_date: Option<DateTime<Utc>>,
}

impl PayoffProjection {
    pub fn project(result: &ScheduleResult, time: &SafeTimeProvider) -> Result<Self> {
        let start_date = time.now();

        let due_dates = result
            .entries()
            .iter()
            .map(|entry| add_months(start_date, entry.month))
            .collect::<Result<Vec<_>>>()?;

        let payoff_date = if clears_balance(result) {
            due_dates.last().copied()
        } else {
            None
        };

        Ok(Self {
            start_date,
            due_dates,
            payoff_date,
        })
    }
}

/// a level schedule that stops at its term counts as paid off when only a
/// sub-penny residue is left
fn clears_balance(result: &ScheduleResult) -> bool {
    match result.outcome() {
        ScheduleOutcome::PaidOff => true,
        ScheduleOutcome::MonthLimitReached => {
            matches!(result.strategy(), RepaymentStrategy::DesiredMonths { .. })
                && result.final_balance().round_for_display(2).is_zero()
        }
        ScheduleOutcome::DidNotConverge { .. } => false,
    }
}

fn add_months(date: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| RepaymentError::InvalidDate {
            message: format!("{} plus {} months is out of range", date, months),
        })
}

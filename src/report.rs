use std::fmt;

use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

use crate::config::DisplayConfig;
use crate::decimal::Money;
use crate::payments::{ScheduleOutcome, ScheduleResult};

/// format an amount for display, e.g. `£1000.00`
///
/// Rounds half away from zero from the stored 8 dp value.
pub fn format_currency(amount: Money, display: &DisplayConfig) -> String {
    let dp = display.decimal_places;
    format!(
        "{}{:.*}",
        display.currency_symbol,
        dp as usize,
        amount.round_for_display(dp)
    )
}

/// read-only rendering of a schedule
pub struct ScheduleReport<'a> {
    result: &'a ScheduleResult,
    display: &'a DisplayConfig,
}

impl<'a> ScheduleReport<'a> {
    pub fn new(result: &'a ScheduleResult, display: &'a DisplayConfig) -> Self {
        Self { result, display }
    }

    fn money(&self, amount: Money) -> String {
        format_currency(amount, self.display)
    }

    /// month by month table
    pub fn table(&self) -> String {
        if self.result.entries().is_empty() {
            return "(no months simulated)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["Month", "Balance", "Interest", "Payment"]);
        for entry in self.result.entries() {
            builder.push_record([
                entry.month.to_string(),
                self.money(entry.opening_balance),
                self.money(entry.interest_accrued),
                self.money(entry.payment_made),
            ]);
        }

        let mut table = Table::from(builder);
        table.with(Style::modern());
        table.to_string()
    }

    pub fn summary(&self) -> String {
        let lines = [
            format!("Total interest paid: {}", self.money(self.result.total_interest_paid())),
            format!("Total paid: {}", self.money(self.result.total_paid())),
            format!("Months to payoff: {}", self.result.months_to_payoff()),
        ];
        lines.join("\n")
    }

    /// notice shown instead of a normal payoff message, if any
    pub fn notice(&self) -> Option<String> {
        let months = self.result.months_to_payoff();
        let owed = self.result.final_balance();

        match self.result.outcome() {
            ScheduleOutcome::PaidOff => None,
            ScheduleOutcome::MonthLimitReached => {
                // sub-penny residue from rounding is not worth a notice
                if owed.round_for_display(self.display.decimal_places).is_zero() {
                    None
                } else {
                    Some(format!(
                        "Balance not cleared: {} still owed after {} months.",
                        self.money(owed),
                        months
                    ))
                }
            }
            ScheduleOutcome::DidNotConverge { iteration_cap } => Some(format!(
                "These payments will never clear the balance: {} still owed after {} months \
                 (calculation stops at {} months).",
                self.money(owed),
                months,
                iteration_cap
            )),
        }
    }
}

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(notice) = self.notice() {
            writeln!(f, "{}\n", notice)?;
        }
        writeln!(f, "{}", self.table())?;
        write!(f, "{}", self.summary())
    }
}

use log::{debug, info, trace, warn};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{RepaymentError, Result};
use crate::interest::accrue_monthly;
use crate::payments::PaymentRule;
use crate::types::{LoanParameters, RepaymentStrategy};

/// one simulated month of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub opening_balance: Money,
    pub interest_accrued: Money,
    pub payment_made: Money,
    pub closing_balance: Money,
    pub cumulative_interest: Money,
}

/// why the month loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScheduleOutcome {
    /// balance reached zero
    PaidOff,
    /// the strategy's own month bound was reached with a balance still owed
    MonthLimitReached,
    /// payments cannot clear the balance within the iteration cap
    DidNotConverge { iteration_cap: u32 },
}

/// complete schedule for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    params: LoanParameters,
    strategy: RepaymentStrategy,
    entries: Vec<ScheduleEntry>,
    total_interest_paid: Money,
    total_paid: Money,
    final_balance: Money,
    outcome: ScheduleOutcome,
}

impl ScheduleResult {
    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    pub fn strategy(&self) -> &RepaymentStrategy {
        &self.strategy
    }

    /// entries in month order, starting at month 1
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn total_interest_paid(&self) -> Money {
        self.total_interest_paid
    }

    pub fn total_paid(&self) -> Money {
        self.total_paid
    }

    /// balance left after the last simulated month
    pub fn final_balance(&self) -> Money {
        self.final_balance
    }

    pub fn months_to_payoff(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn outcome(&self) -> ScheduleOutcome {
        self.outcome
    }

    pub fn is_converged(&self) -> bool {
        !matches!(self.outcome, ScheduleOutcome::DidNotConverge { .. })
    }

    /// turn a non-converging schedule into an error
    pub fn ensure_converged(self) -> Result<Self> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(RepaymentError::DidNotConverge {
                months: self.months_to_payoff(),
                final_balance: self.final_balance,
            })
        }
    }

    /// get json representation of the schedule
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

/// month-stepping amortization engine
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// simulate month by month until payoff or a bound
    pub fn compute(&self, params: &LoanParameters, strategy: &RepaymentStrategy) -> ScheduleResult {
        let cap = self.config.iteration_cap;
        let monthly_rate = params.monthly_rate();

        debug!(
            "computing schedule: balance {} at {} ({:?})",
            params.starting_balance(),
            params.annual_rate(),
            strategy
        );

        let Some(rule) = PaymentRule::resolve(params, strategy, &self.config) else {
            warn!("no usable level payment for {:?}, schedule not computed", strategy);
            return ScheduleResult {
                params: *params,
                strategy: *strategy,
                entries: Vec::new(),
                total_interest_paid: Money::ZERO,
                total_paid: Money::ZERO,
                final_balance: params.starting_balance(),
                outcome: ScheduleOutcome::DidNotConverge { iteration_cap: cap },
            };
        };

        // strategies with their own month bound are not subject to the cap
        let bound = strategy.month_limit().unwrap_or(cap);
        let mut ledger = Ledger::new(params.starting_balance(), bound);

        let outcome = loop {
            if !ledger.balance.is_positive() {
                break ScheduleOutcome::PaidOff;
            }
            if ledger.month >= bound {
                break match strategy.month_limit() {
                    Some(_) => ScheduleOutcome::MonthLimitReached,
                    None => ScheduleOutcome::DidNotConverge { iteration_cap: cap },
                };
            }
            if ledger.step(monthly_rate, &rule).is_none() {
                warn!(
                    "balance no longer representable after {} months, treating as divergent",
                    ledger.month
                );
                break ScheduleOutcome::DidNotConverge { iteration_cap: cap };
            }
        };

        if let ScheduleOutcome::DidNotConverge { .. } = outcome {
            warn!(
                "schedule did not converge: {} still owed after {} months",
                ledger.balance, ledger.month
            );
        }
        info!(
            "schedule complete: {} months, {} interest, outcome {:?}",
            ledger.month, ledger.total_interest, outcome
        );

        ScheduleResult {
            params: *params,
            strategy: *strategy,
            entries: ledger.entries,
            total_interest_paid: ledger.total_interest,
            total_paid: ledger.total_paid,
            final_balance: ledger.balance,
            outcome,
        }
    }
}

/// compute a schedule with the default engine configuration
pub fn compute_schedule(params: LoanParameters, strategy: RepaymentStrategy) -> ScheduleResult {
    AmortizationEngine::default().compute(&params, &strategy)
}

/// running state of a single computation
struct Ledger {
    balance: Money,
    month: u32,
    total_interest: Money,
    total_paid: Money,
    entries: Vec<ScheduleEntry>,
}

impl Ledger {
    fn new(starting_balance: Money, bound: u32) -> Self {
        Self {
            balance: starting_balance,
            month: 0,
            total_interest: Money::ZERO,
            total_paid: Money::ZERO,
            entries: Vec::with_capacity(bound.min(1_200) as usize),
        }
    }

    /// simulate one month, `None` on arithmetic overflow
    fn step(&mut self, monthly_rate: Rate, rule: &PaymentRule) -> Option<()> {
        let opening = self.balance;
        let interest = accrue_monthly(opening, monthly_rate)?;
        let payment = rule.payment_for(opening)?;
        let closing = opening
            .checked_add(interest)?
            .checked_sub(payment)?
            .clamp_non_negative();
        let total_interest = self.total_interest.checked_add(interest)?;
        let total_paid = self.total_paid.checked_add(payment)?;

        self.month += 1;
        trace!(
            "month {}: opening {} interest {} payment {} closing {}",
            self.month, opening, interest, payment, closing
        );

        self.entries.push(ScheduleEntry {
            month: self.month,
            opening_balance: opening,
            interest_accrued: interest,
            payment_made: payment,
            closing_balance: closing,
            cumulative_interest: total_interest,
        });
        self.balance = closing;
        self.total_interest = total_interest;
        self.total_paid = total_paid;
        Some(())
    }
}

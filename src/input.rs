use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::errors::{RepaymentError, Result};
use crate::payments::{AmortizationEngine, ScheduleResult};
use crate::types::{LoanParameters, RepaymentMode, RepaymentStrategy};

/// form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CreditBalance,
    InterestRate,
    Mode,
    MinimumPercentage,
    MaxMonths,
    FixedPayment,
    DesiredMonths,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditBalance => "creditBalance",
            Self::InterestRate => "interestRate",
            Self::Mode => "mode",
            Self::MinimumPercentage => "minimumPercentage",
            Self::MaxMonths => "maxMonths",
            Self::FixedPayment => "fixedPayment",
            Self::DesiredMonths => "desiredMonths",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// per-field validation messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// message for a field, if it failed
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input")?;
        for (i, (field, message)) in self.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{} {}", sep, field, message)?;
        }
        Ok(())
    }
}

/// raw form values exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepaymentForm {
    pub credit_balance: String,
    pub interest_rate: String,
    pub mode: String,
    pub minimum_percentage: String,
    pub max_months: String,
    pub fixed_payment: String,
    pub desired_months: String,
}

impl RepaymentForm {
    pub fn new(credit_balance: impl Into<String>, interest_rate: impl Into<String>) -> Self {
        Self {
            credit_balance: credit_balance.into(),
            interest_rate: interest_rate.into(),
            ..Self::default()
        }
    }

    /// parse a form submitted as json
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn minimum(
        mut self,
        minimum_percentage: impl Into<String>,
        max_months: impl Into<String>,
    ) -> Self {
        self.mode = RepaymentMode::Minimum.to_string();
        self.minimum_percentage = minimum_percentage.into();
        self.max_months = max_months.into();
        self
    }

    pub fn fixed(mut self, fixed_payment: impl Into<String>) -> Self {
        self.mode = RepaymentMode::Fixed.to_string();
        self.fixed_payment = fixed_payment.into();
        self
    }

    pub fn desired_months(mut self, desired_months: impl Into<String>) -> Self {
        self.mode = RepaymentMode::DesiredMonths.to_string();
        self.desired_months = desired_months.into();
        self
    }

    /// check every field and build typed engine inputs
    ///
    /// All failing fields are reported together. Only the fields of the
    /// selected mode are checked.
    pub fn validate(&self) -> Result<(LoanParameters, RepaymentStrategy)> {
        let mut errors = ValidationErrors::default();

        let balance = match parse_number(&self.credit_balance) {
            None => {
                errors.insert(FormField::CreditBalance, "Please enter a valid credit balance.");
                None
            }
            Some(d) if !Money::from_decimal(d).is_positive() => {
                errors.insert(
                    FormField::CreditBalance,
                    "Credit balance must be greater than zero.",
                );
                None
            }
            Some(d) => Some(Money::from_decimal(d)),
        };

        let rate = match parse_number(&self.interest_rate) {
            None => {
                errors.insert(FormField::InterestRate, "Please enter a valid interest rate.");
                None
            }
            Some(d) if d < Decimal::ZERO => {
                errors.insert(FormField::InterestRate, "Interest rate cannot be negative.");
                None
            }
            Some(d) => Some(d),
        };

        let strategy = match RepaymentMode::from_str(&self.mode) {
            Err(_) => {
                errors.insert(FormField::Mode, "Please choose a repayment option.");
                None
            }
            Ok(mode) => self.strategy_fields(mode, &mut errors),
        };

        match (balance, rate, strategy) {
            (Some(balance), Some(rate), Some(strategy)) if errors.is_empty() => {
                Ok((LoanParameters::new(balance, rate)?, strategy))
            }
            _ => Err(RepaymentError::Validation(errors)),
        }
    }

    /// validate the form and run the engine, which is skipped on any error
    pub fn calculate(&self, config: &CalculatorConfig) -> Result<ScheduleResult> {
        config.validate()?;
        let (params, strategy) = self.validate()?;
        Ok(AmortizationEngine::new(config.engine).compute(&params, &strategy))
    }

    fn strategy_fields(
        &self,
        mode: RepaymentMode,
        errors: &mut ValidationErrors,
    ) -> Option<RepaymentStrategy> {
        match mode {
            RepaymentMode::Minimum => {
                let percent = match parse_number(&self.minimum_percentage) {
                    None => {
                        errors.insert(
                            FormField::MinimumPercentage,
                            "Please enter a valid minimum percentage.",
                        );
                        None
                    }
                    Some(d) if d <= Decimal::ZERO => {
                        errors.insert(
                            FormField::MinimumPercentage,
                            "Minimum percentage must be greater than zero.",
                        );
                        None
                    }
                    Some(d) => Some(d),
                };
                let max_months = month_count(
                    &self.max_months,
                    FormField::MaxMonths,
                    "Please enter the number of months.",
                    errors,
                );
                RepaymentStrategy::minimum_percentage(percent?, max_months?).ok()
            }
            RepaymentMode::Fixed => match parse_number(&self.fixed_payment) {
                None => {
                    errors.insert(
                        FormField::FixedPayment,
                        "Please enter a valid fixed payment amount.",
                    );
                    None
                }
                Some(d) if !Money::from_decimal(d).is_positive() => {
                    errors.insert(
                        FormField::FixedPayment,
                        "Fixed payment must be greater than zero.",
                    );
                    None
                }
                Some(d) => RepaymentStrategy::fixed_payment(Money::from_decimal(d)).ok(),
            },
            RepaymentMode::DesiredMonths => {
                let months = month_count(
                    &self.desired_months,
                    FormField::DesiredMonths,
                    "Please enter the number of months to repay over.",
                    errors,
                );
                RepaymentStrategy::desired_months(months?).ok()
            }
        }
    }
}

/// parse a finite number, accepting plain and scientific notation
fn parse_number(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let numeric = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if raw.is_empty() || !raw.chars().all(numeric) {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn month_count(
    raw: &str,
    field: FormField,
    missing: &str,
    errors: &mut ValidationErrors,
) -> Option<u32> {
    let Some(d) = parse_number(raw) else {
        errors.insert(field, missing);
        return None;
    };
    if !d.fract().is_zero() || d <= Decimal::ZERO {
        errors.insert(field, "Number of months must be a whole number greater than zero.");
        return None;
    }
    let months = d.to_u32();
    if months.is_none() {
        errors.insert(field, "Number of months is too large.");
    }
    months
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{RepaymentError, Result};

/// balance and pricing of the credit line being repaid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanParameters {
    starting_balance: Money,
    annual_rate: Rate,
}

impl LoanParameters {
    /// `annual_rate_percent` is in percentage points, so 19.9 means 19.9%
    pub fn new(starting_balance: Money, annual_rate_percent: Decimal) -> Result<Self> {
        if !starting_balance.is_positive() {
            return Err(RepaymentError::InvalidBalance {
                balance: starting_balance,
            });
        }

        let annual_rate = Rate::from_percent(annual_rate_percent);
        if annual_rate_percent < Decimal::ZERO {
            return Err(RepaymentError::InvalidInterestRate { rate: annual_rate });
        }

        Ok(Self {
            starting_balance,
            annual_rate,
        })
    }

    pub fn starting_balance(&self) -> Money {
        self.starting_balance
    }

    /// nominal annual rate as a fraction
    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate.as_percentage()
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }
}

/// how each month's payment is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum RepaymentStrategy {
    /// pay a percentage of the balance, never less than the floor payment
    MinimumPercentage { percent: Decimal, max_months: u32 },
    /// pay the same amount every month until the balance is cleared
    FixedPayment { amount: Money },
    /// pay a level amount that clears the balance in `months`
    DesiredMonths { months: u32 },
}

impl RepaymentStrategy {
    pub fn minimum_percentage(percent: Decimal, max_months: u32) -> Result<Self> {
        if percent <= Decimal::ZERO {
            return Err(RepaymentError::InvalidPercentage { percent });
        }
        if max_months == 0 {
            return Err(RepaymentError::InvalidMonths { months: max_months });
        }
        Ok(Self::MinimumPercentage { percent, max_months })
    }

    pub fn fixed_payment(amount: Money) -> Result<Self> {
        if !amount.is_positive() {
            return Err(RepaymentError::InvalidPaymentAmount { amount });
        }
        Ok(Self::FixedPayment { amount })
    }

    pub fn desired_months(months: u32) -> Result<Self> {
        if months == 0 {
            return Err(RepaymentError::InvalidMonths { months });
        }
        Ok(Self::DesiredMonths { months })
    }

    pub fn kind(&self) -> RepaymentMode {
        match self {
            Self::MinimumPercentage { .. } => RepaymentMode::Minimum,
            Self::FixedPayment { .. } => RepaymentMode::Fixed,
            Self::DesiredMonths { .. } => RepaymentMode::DesiredMonths,
        }
    }

    /// the strategy's own month bound, if it has one
    pub fn month_limit(&self) -> Option<u32> {
        match self {
            Self::MinimumPercentage { max_months, .. } => Some(*max_months),
            Self::FixedPayment { .. } => None,
            Self::DesiredMonths { months } => Some(*months),
        }
    }
}

/// strategy selector as it arrives from a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepaymentMode {
    Minimum,
    Fixed,
    DesiredMonths,
}

impl RepaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Fixed => "fixed",
            Self::DesiredMonths => "desiredMonths",
        }
    }
}

impl fmt::Display for RepaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentMode {
    type Err = RepaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "minimum" => Ok(Self::Minimum),
            "fixed" => Ok(Self::Fixed),
            "desiredMonths" => Ok(Self::DesiredMonths),
            other => Err(RepaymentError::InvalidConfiguration {
                message: format!("unknown repayment mode '{}'", other),
            }),
        }
    }
}

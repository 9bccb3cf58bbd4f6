use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::input::ValidationErrors;

#[derive(Error, Debug)]
pub enum RepaymentError {
    #[error("invalid starting balance: {balance} (must be greater than zero)")]
    InvalidBalance {
        balance: Money,
    },

    #[error("invalid interest rate: {rate} (must not be negative)")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid repayment percentage: {percent} (must be greater than zero)")]
    InvalidPercentage {
        percent: Decimal,
    },

    #[error("invalid payment amount: {amount} (must be greater than zero)")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("invalid month count: {months} (must be at least one)")]
    InvalidMonths {
        months: u32,
    },

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("schedule did not converge: balance {final_balance} still owed after {months} months")]
    DidNotConverge {
        months: u32,
        final_balance: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepaymentError>;

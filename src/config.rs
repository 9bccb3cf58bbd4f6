use serde::{Deserialize, Serialize};

use crate::decimal::{Money, MONEY_DP};
use crate::errors::{RepaymentError, Result};

/// floor payment under the minimum-percentage strategy
pub const DEFAULT_FLOOR_PAYMENT: i64 = 5;

/// hard ceiling on simulated months, 300 years
pub const DEFAULT_ITERATION_CAP: u32 = 3_600;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// arithmetic policy of the amortization engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub floor_payment: Money,
    pub iteration_cap: u32,
}

/// presentation settings, never consulted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub decimal_places: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            floor_payment: Money::from_major(DEFAULT_FLOOR_PAYMENT),
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            decimal_places: 2,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iteration_cap == 0 {
            return Err(RepaymentError::InvalidConfiguration {
                message: "iteration cap must be at least one month".to_string(),
            });
        }
        if self.floor_payment.is_negative() {
            return Err(RepaymentError::InvalidConfiguration {
                message: format!("floor payment cannot be negative: {}", self.floor_payment),
            });
        }
        Ok(())
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.decimal_places > MONEY_DP {
            return Err(RepaymentError::InvalidConfiguration {
                message: format!(
                    "cannot display {} decimal places, amounts are kept to {}",
                    self.decimal_places, MONEY_DP
                ),
            });
        }
        Ok(())
    }
}

impl CalculatorConfig {
    /// parse configuration from json, missing sections fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.display.validate()
    }

    pub fn with_floor_payment(mut self, floor_payment: Money) -> Self {
        self.engine.floor_payment = floor_payment;
        self
    }

    pub fn with_iteration_cap(mut self, iteration_cap: u32) -> Self {
        self.engine.iteration_cap = iteration_cap;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.display.currency_symbol = symbol.into();
        self
    }

    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.display.decimal_places = places;
        self
    }
}

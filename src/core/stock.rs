use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Coarse stock bracket derived from `quantity / max_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

/// Ratio boundaries between stock brackets.
///
/// Brackets are closed on the lower edge: `ratio == low` is `Medium` and
/// `ratio == high` is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockThresholds {
    pub low: f64,
    pub high: f64,
}

impl StockThresholds {
    pub const DEFAULT_LOW: f64 = 0.3;
    pub const DEFAULT_HIGH: f64 = 0.6;

    pub fn new(low: f64, high: f64) -> ChartResult<Self> {
        let thresholds = Self { low, high };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low <= 0.0 || self.low >= self.high
        {
            return Err(ChartError::InvalidData(format!(
                "stock thresholds must satisfy 0 < low < high, got low={} high={}",
                self.low, self.high
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn classify_ratio(self, ratio: f64) -> StockLevel {
        if ratio < self.low {
            StockLevel::Low
        } else if ratio < self.high {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    /// Classifies `quantity` against `max_quantity`.
    ///
    /// Callers pass a `max_quantity` of at least 1, see [`max_quantity`].
    #[must_use]
    pub fn classify(self, quantity: f64, max_quantity: f64) -> StockLevel {
        self.classify_ratio(quantity / max_quantity)
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

/// Largest quantity, floored at 1 so ratios never divide by zero.
#[must_use]
pub fn max_quantity(quantities: &[f64]) -> f64 {
    quantities.iter().copied().fold(1.0, f64::max)
}

//! Mapping of the model's positive-class probability to a reported percentage
//! and a four-level mortality category.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::constants::{
    HIGH_MORTALITY_PERCENT, MODERATE_MORTALITY_PERCENT, VERY_HIGH_MORTALITY_PERCENT,
};

/// Four-level mortality category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MortalityRisk {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Very High Risk")]
    VeryHigh,
}

impl MortalityRisk {
    /// Maps a percentage (0-100) to its category.
    ///
    /// Each bound is exclusive: exactly 75.00 is `High`, not `VeryHigh`.
    pub fn from_percent(percent: f64) -> Self {
        if percent > VERY_HIGH_MORTALITY_PERCENT {
            MortalityRisk::VeryHigh
        } else if percent > HIGH_MORTALITY_PERCENT {
            MortalityRisk::High
        } else if percent > MODERATE_MORTALITY_PERCENT {
            MortalityRisk::Moderate
        } else {
            MortalityRisk::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MortalityRisk::Low => "Low Risk",
            MortalityRisk::Moderate => "Moderate Risk",
            MortalityRisk::High => "High Risk",
            MortalityRisk::VeryHigh => "Very High Risk",
        }
    }
}

impl std::fmt::Display for MortalityRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a probability in `[0, 1]` to a percentage rounded to two decimals.
///
/// Exact midpoints round to the even neighbour, so 12.125 reports as 12.12.
/// Non-finite input is returned unrounded.
pub fn probability_to_percent(probability: f64) -> f64 {
    let percent = probability * 100.0;
    match Decimal::from_f64_retain(percent) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
            rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
        }
        None => percent,
    }
}

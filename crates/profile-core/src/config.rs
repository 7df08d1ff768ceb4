//! Configuration types for profile comparison, display and averaging

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Absolute tolerance used by `almost_equal`, expressed in decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Values must agree to `10^-decimal`
    pub decimal: i32,
}

impl Tolerance {
    pub fn new(decimal: i32) -> Self {
        Self { decimal }
    }

    /// Absolute tolerance `10^-decimal`
    pub fn eps(&self) -> f64 {
        10f64.powi(-self.decimal)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { decimal: 14 }
    }
}

/// Display smoothing of discrete weighted profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Number of neighbouring profile units averaged in; 0 disables smoothing
    pub window: usize,
}

/// How a list of profiles is folded into one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AveragingStrategy {
    /// Left-to-right fold starting from a copy of the first profile
    #[default]
    Sequential,
    /// Balanced merge tree; independent pairs run in parallel with `parallel`
    PairwiseTree,
}

impl AveragingStrategy {
    /// Get the name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::PairwiseTree => "pairwise_tree",
        }
    }
}

/// Bundled settings for profile operations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub tolerance: Tolerance,
    pub smoothing: SmoothingConfig,
    pub averaging: AveragingStrategy,
}

impl ProfileConfig {
    /// Load settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("profile configuration: {e}")))
    }

    pub fn with_tolerance(mut self, decimal: i32) -> Self {
        self.tolerance = Tolerance::new(decimal);
        self
    }

    pub fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing = SmoothingConfig { window };
        self
    }

    pub fn with_averaging(mut self, averaging: AveragingStrategy) -> Self {
        self.averaging = averaging;
        self
    }
}

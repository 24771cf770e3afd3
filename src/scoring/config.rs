use serde::{Deserialize, Serialize};

use super::deadline::DEFAULT_ROLLOVER_GRACE_DAYS;
use super::opportunity::DEFAULT_SAFETY_MARGIN;

/// Engine tuning knobs.
///
/// Example YAML:
/// ```yaml
/// engine:
///   safety_margin: 1.0
///   rollover_grace_days: 30
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Points above a program minimum for admission to count as safe (default: 1.0)
    #[serde(default)]
    pub safety_margin: Option<f64>,

    /// Days a deadline may be past before it is read as next year's (default: 30)
    #[serde(default)]
    pub rollover_grace_days: Option<i64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            safety_margin: Some(DEFAULT_SAFETY_MARGIN),
            rollover_grace_days: Some(DEFAULT_ROLLOVER_GRACE_DAYS),
        }
    }
}

impl EngineConfig {
    pub fn safety_margin(&self) -> f64 {
        self.safety_margin.unwrap_or(DEFAULT_SAFETY_MARGIN)
    }

    pub fn rollover_grace_days(&self) -> i64 {
        self.rollover_grace_days.unwrap_or(DEFAULT_ROLLOVER_GRACE_DAYS)
    }
}

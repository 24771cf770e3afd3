use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::{EngineError, GoalInput, ScoreInput};

pub const STORE_VERSION: u32 = 1;

/// A student's saved simulator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub regional: f64,
    pub continuous: f64,
    #[serde(default)]
    pub national: Option<f64>,
    #[serde(default)]
    pub target: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Full score input, if the national exam score is known.
    pub fn scores(&self) -> Result<Option<ScoreInput>, EngineError> {
        self.national
            .map(|national| ScoreInput::new(self.regional, self.continuous, national))
            .transpose()
    }

    pub fn goal(&self) -> Result<Option<GoalInput>, EngineError> {
        self.target
            .map(|target| GoalInput::new(self.regional, self.continuous, target))
            .transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreState {
    pub version: u32,
    #[serde(default)]
    pub students: BTreeMap<String, StudentRecord>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState {
    /// Create a new empty state with the current version
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            students: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(national: Option<f64>, target: Option<f64>) -> StudentRecord {
        StudentRecord {
            id: "amina".to_string(),
            name: "Amina".to_string(),
            regional: 14.5,
            continuous: 16.0,
            national,
            target,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_state_empty() {
        let state = StoreState::new();
        assert_eq!(state.version, 1);
        assert!(state.students.is_empty());
    }

    #[test]
    fn test_scores_need_national() {
        assert_eq!(record(None, None).scores().unwrap(), None);
        let scores = record(Some(15.0), None).scores().unwrap().unwrap();
        assert_eq!(scores.average(), 15.13);
    }

    #[test]
    fn test_goal_from_record() {
        let goal = record(None, Some(16.0)).goal().unwrap().unwrap();
        assert_eq!(goal.solve().required, 16.75);
    }

    #[test]
    fn test_invalid_saved_values_surface() {
        let mut bad = record(Some(15.0), None);
        bad.regional = 25.0;
        assert!(bad.scores().is_err());
    }
}

use std::collections::HashSet;

use super::deadline::parse_deadline;
use super::grade::MAX_SCORE;
use crate::config::Config;

fn in_score_range(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_SCORE).contains(&value)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(margin) = config.engine.safety_margin {
        if !margin.is_finite() || margin < 0.0 {
            errors.push("engine.safety_margin: must be non-negative".to_string());
        }
    }

    if let Some(days) = config.engine.rollover_grace_days {
        if days < 0 {
            errors.push("engine.rollover_grace_days: must be non-negative".to_string());
        }
    }

    let mut seen = HashSet::new();
    for (i, opportunity) in config.opportunities.iter().enumerate() {
        let name = opportunity.name.trim();
        if name.is_empty() {
            errors.push(format!("opportunities[{}].name: must not be empty", i));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(format!("opportunities[{}].name: duplicate '{}'", i, name));
        }
        if !in_score_range(opportunity.min_average) {
            errors.push(format!(
                "opportunities[{}].min_average: {} is outside 0-20",
                i, opportunity.min_average
            ));
        }
    }

    for (i, scholarship) in config.scholarships.iter().enumerate() {
        if scholarship.name.trim().is_empty() {
            errors.push(format!("scholarships[{}].name: must not be empty", i));
        }
        if let Err(e) = parse_deadline(&scholarship.deadline) {
            errors.push(format!("scholarships[{}].deadline: {}", i, e));
        }
        if let Some(min) = scholarship.min_average {
            if !in_score_range(min) {
                errors.push(format!(
                    "scholarships[{}].min_average: {} is outside 0-20",
                    i, min
                ));
            }
        }
    }

    for (i, question) in config.quiz.iter().enumerate() {
        if question.options.len() < 2 {
            errors.push(format!("quiz[{}].options: needs at least two options", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

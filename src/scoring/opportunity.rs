use serde::{Deserialize, Serialize};
use std::fmt;

/// Points above a program's minimum at which admission counts as safe.
pub const DEFAULT_SAFETY_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityCategory {
    Engineering,
    Business,
    Health,
    Architecture,
    Sciences,
    Humanities,
}

impl OpportunityCategory {
    /// Declaration order, also used to break ties between equal quiz scores.
    pub const ALL: [OpportunityCategory; 6] = [
        OpportunityCategory::Engineering,
        OpportunityCategory::Business,
        OpportunityCategory::Health,
        OpportunityCategory::Architecture,
        OpportunityCategory::Sciences,
        OpportunityCategory::Humanities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityCategory::Engineering => "engineering",
            OpportunityCategory::Business => "business",
            OpportunityCategory::Health => "health",
            OpportunityCategory::Architecture => "architecture",
            OpportunityCategory::Sciences => "sciences",
            OpportunityCategory::Humanities => "humanities",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for OpportunityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A program and the minimum average it historically admits.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OpportunityThreshold {
    pub name: String,
    pub min_average: f64,
    pub category: OpportunityCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityMatch<'a> {
    pub opportunity: &'a OpportunityThreshold,
    pub is_safe: bool,
}

/// Programs whose minimum the score reaches, in table order.
///
/// `is_safe` is set when the score clears the minimum by at least `safety_margin`.
pub fn filter_opportunities(
    score: f64,
    table: &[OpportunityThreshold],
    safety_margin: f64,
) -> Vec<OpportunityMatch<'_>> {
    table
        .iter()
        .filter(|opportunity| opportunity.min_average <= score)
        .map(|opportunity| OpportunityMatch {
            opportunity,
            is_safe: score >= opportunity.min_average + safety_margin,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(name: &str, min_average: f64, category: OpportunityCategory) -> OpportunityThreshold {
        OpportunityThreshold {
            name: name.to_string(),
            min_average,
            category,
        }
    }

    fn sample_table() -> Vec<OpportunityThreshold> {
        vec![
            threshold("Médecine", 16.0, OpportunityCategory::Health),
            threshold("ENCG", 12.5, OpportunityCategory::Business),
            threshold("Faculté des Sciences", 10.0, OpportunityCategory::Sciences),
            threshold("ENSA", 14.0, OpportunityCategory::Engineering),
        ]
    }

    #[test]
    fn test_keeps_reachable_programs_in_table_order() {
        let table = sample_table();
        let matches = filter_opportunities(14.0, &table, DEFAULT_SAFETY_MARGIN);
        let names: Vec<&str> = matches.iter().map(|m| m.opportunity.name.as_str()).collect();
        assert_eq!(names, vec!["ENCG", "Faculté des Sciences", "ENSA"]);
    }

    #[test]
    fn test_minimum_is_inclusive() {
        let table = sample_table();
        let matches = filter_opportunities(16.0, &table, DEFAULT_SAFETY_MARGIN);
        assert_eq!(matches.len(), 4);
        assert!(!matches[0].is_safe);
    }

    #[test]
    fn test_safety_margin_edge() {
        let table = vec![threshold("ENCG", 12.5, OpportunityCategory::Business)];

        let matches = filter_opportunities(13.49, &table, DEFAULT_SAFETY_MARGIN);
        assert_eq!(matches.len(), 1);
        assert!(!matches[0].is_safe);

        let matches = filter_opportunities(13.5, &table, DEFAULT_SAFETY_MARGIN);
        assert!(matches[0].is_safe);
    }

    #[test]
    fn test_below_passing_returns_empty() {
        let table = sample_table();
        assert!(filter_opportunities(9.5, &table, DEFAULT_SAFETY_MARGIN).is_empty());
    }

    #[test]
    fn test_custom_margin() {
        let table = vec![threshold("ENSA", 14.0, OpportunityCategory::Engineering)];
        let matches = filter_opportunities(15.0, &table, 2.0);
        assert!(!matches[0].is_safe);
        let matches = filter_opportunities(15.0, &table, 0.0);
        assert!(matches[0].is_safe);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            OpportunityCategory::parse("Engineering"),
            Some(OpportunityCategory::Engineering)
        );
        assert_eq!(
            OpportunityCategory::parse(" health "),
            Some(OpportunityCategory::Health)
        );
        assert_eq!(OpportunityCategory::parse("law"), None);
    }
}

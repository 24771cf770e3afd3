use serde::{Deserialize, Serialize};

use super::catalog::{default_opportunities, default_quiz, default_scholarships};
use crate::scoring::{EngineConfig, OpportunityThreshold, QuizQuestion, Scholarship};

/// Contents of `config.yaml`. Every section falls back to the built-in catalog.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default = "default_opportunities")]
    pub opportunities: Vec<OpportunityThreshold>,

    #[serde(default = "default_scholarships")]
    pub scholarships: Vec<Scholarship>,

    #[serde(default = "default_quiz")]
    pub quiz: Vec<QuizQuestion>,

    /// Student record file (defaults to ~/.config/bac-compass/students.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            opportunities: default_opportunities(),
            scholarships: default_scholarships(),
            quiz: default_quiz(),
            store_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::OpportunityCategory;

    #[test]
    fn test_empty_config_uses_catalog() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.opportunities.is_empty());
        assert!(!config.scholarships.is_empty());
        assert!(!config.quiz.is_empty());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
engine:
  safety_margin: 0.5
opportunities:
  - name: "ENSA Marrakech"
    min_average: 14.2
    category: engineering
scholarships:
  - name: "Bourse locale"
    provider: "Commune"
    deadline: "31 Juillet"
store_path: "/tmp/students.json"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.engine.safety_margin(), 0.5);
        assert_eq!(config.opportunities.len(), 1);
        assert_eq!(config.opportunities[0].category, OpportunityCategory::Engineering);
        assert_eq!(config.scholarships[0].min_average, None);
        assert_eq!(config.quiz, default_quiz());
        assert_eq!(config.store_path.as_deref(), Some("/tmp/students.json"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let yaml = r#"
opportunities:
  - name: "Law school"
    min_average: 12
    category: law
"#;
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}

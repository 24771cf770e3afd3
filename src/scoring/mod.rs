pub mod config;
pub mod deadline;
pub mod error;
pub mod grade;
pub mod mention;
pub mod opportunity;
pub mod orientation;
pub mod scholarship;
pub mod validation;

pub use config::EngineConfig;
pub use deadline::{
    deadline_urgency, parse_deadline, parse_deadline_urgency, DeadlineUrgency, UrgencyBand,
};
pub use error::EngineError;
pub use grade::{
    compute_average, solve_required_national, GoalInput, GoalOutcome, ScoreInput, MAX_SCORE,
};
pub use mention::{classify_mention, Mention};
pub use opportunity::{
    filter_opportunities, OpportunityCategory, OpportunityMatch, OpportunityThreshold,
};
pub use orientation::{parse_answers, recommend, score_quiz, FieldScore, QuizOption, QuizQuestion, Recommendation};
pub use scholarship::{assess_scholarships, Scholarship, ScholarshipStatus};
pub use validation::validate_config;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::opportunity::{filter_opportunities, OpportunityCategory, OpportunityMatch, OpportunityThreshold};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

/// One answer choice; picking it adds a point to its field.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizOption {
    pub text: String,
    pub category: OpportunityCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldScore {
    pub category: OpportunityCategory,
    pub points: u32,
}

/// Tally quiz answers (0-based option indices, one per question).
///
/// Fields are ranked by points, ties kept in category declaration order.
/// Fields nobody picked are left out.
pub fn score_quiz(questions: &[QuizQuestion], answers: &[usize]) -> Result<Vec<FieldScore>, EngineError> {
    if answers.len() != questions.len() {
        return Err(EngineError::invalid(
            "answers",
            answers.len(),
            format!("expected one answer per question ({})", questions.len()),
        ));
    }

    let mut points = [0u32; OpportunityCategory::ALL.len()];
    for (question, &answer) in questions.iter().zip(answers) {
        let option = question.options.get(answer).ok_or_else(|| {
            EngineError::invalid(
                "answers",
                answer + 1,
                format!(
                    "'{}' has {} options",
                    question.prompt,
                    question.options.len()
                ),
            )
        })?;
        if let Some(slot) = OpportunityCategory::ALL
            .iter()
            .position(|category| *category == option.category)
        {
            points[slot] += 1;
        }
    }

    let mut scores: Vec<FieldScore> = OpportunityCategory::ALL
        .iter()
        .zip(points)
        .filter(|(_, points)| *points > 0)
        .map(|(category, points)| FieldScore {
            category: *category,
            points,
        })
        .collect();

    // stable sort keeps declaration order for ties
    scores.sort_by(|a, b| b.points.cmp(&a.points));
    Ok(scores)
}

/// Read answers typed as 1-based option numbers ("2,1,3") into 0-based indices.
pub fn parse_answers(text: &str) -> Result<Vec<usize>, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::invalid("answers", text, "is empty"));
    }
    text.split(',')
        .map(|part| {
            let part = part.trim();
            let choice: usize = part
                .parse()
                .map_err(|_| EngineError::invalid("answers", part, "is not an option number"))?;
            choice
                .checked_sub(1)
                .ok_or_else(|| EngineError::invalid("answers", part, "options start at 1"))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub category: OpportunityCategory,
    pub matches: Vec<OpportunityMatch<'a>>,
}

/// Programs of the strongest quiz field that `average` reaches.
pub fn recommend<'a>(
    scores: &[FieldScore],
    table: &'a [OpportunityThreshold],
    average: f64,
    safety_margin: f64,
) -> Option<Recommendation<'a>> {
    let top = scores.first()?;
    let matches = filter_opportunities(average, table, safety_margin)
        .into_iter()
        .filter(|m| m.opportunity.category == top.category)
        .collect();
    Some(Recommendation {
        category: top.category,
        matches,
    })
}

use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{
    DeadlineUrgency, FieldScore, GoalOutcome, Mention, OpportunityMatch, Recommendation,
    ScholarshipStatus, ScoreInput, UrgencyBand,
};
use crate::store::StudentRecord;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a grade with two decimals ("15.13")
pub fn format_grade(value: f64) -> String {
    format!("{:.2}", value)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Width left for a name column once `fixed_width` is taken, or None for pipes
fn name_budget(fixed_width: usize) -> Option<usize> {
    get_terminal_width().map(|width| {
        if width > fixed_width + 10 {
            width - fixed_width
        } else {
            20
        }
    })
}

fn fit_name(name: &str, budget: Option<usize>) -> String {
    match budget {
        Some(width) => truncate_name(name, width),
        None => name.to_string(),
    }
}

pub fn format_mention(average: f64, mention: &Mention, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} ({})\n  {}",
            mention.label.bold(),
            format_grade(average),
            mention.description.dimmed()
        )
    } else {
        format!(
            "{} ({})\n  {}",
            mention.label,
            format_grade(average),
            mention.description
        )
    }
}

/// Result card for the grade simulator
pub fn format_average_report(
    input: &ScoreInput,
    mention: &Mention,
    matches: &[OpportunityMatch],
    use_colors: bool,
) -> String {
    let average = input.average();
    let lines = [
        format!(
            "Regional: {}  Continuous: {}  National: {}",
            format_grade(input.regional()),
            format_grade(input.continuous()),
            format_grade(input.national())
        ),
        if use_colors {
            format!("Average: {}", format_grade(average).bold())
        } else {
            format!("Average: {}", format_grade(average))
        },
        format!("Mention: {}", format_mention(average, mention, use_colors)),
        String::new(),
        "Reachable programs:".to_string(),
        format_opportunity_table(matches, use_colors),
    ];
    lines.join("\n")
}

/// Result card for the goal solver
pub fn format_goal_report(
    outcome: &GoalOutcome,
    matches: &[OpportunityMatch],
    use_colors: bool,
) -> String {
    let required = format_grade(outcome.required);
    let verdict = if outcome.is_feasible() {
        let line = format!("National exam score needed: {} / 20", required);
        if use_colors {
            line.green().to_string()
        } else {
            line
        }
    } else {
        let line = format!(
            "Target {} is out of reach: it would take {} / 20 at the national exam",
            format_grade(outcome.target),
            required
        );
        if use_colors {
            line.red().to_string()
        } else {
            line
        }
    };

    format!(
        "{}\n\nPrograms open at {}:\n{}",
        verdict,
        format_grade(outcome.target),
        format_opportunity_table(matches, use_colors)
    )
}

/// Format matched programs, one per line: minimum, safety, name, category
pub fn format_opportunity_table(matches: &[OpportunityMatch], use_colors: bool) -> String {
    if matches.is_empty() {
        return "No programs reachable with this average.".to_string();
    }

    // min (5) + 2 + status (6) + 2 + category (12) + 2 separators
    let budget = name_budget(5 + 2 + 6 + 2 + 12 + 2);

    matches
        .iter()
        .map(|m| {
            let min = format!("{:>5}", format_grade(m.opportunity.min_average));
            let status = if m.is_safe { "safe  " } else { "reach " };
            let name = fit_name(&m.opportunity.name, budget);
            let category = m.opportunity.category.as_str();
            if use_colors {
                let status = if m.is_safe {
                    status.green().to_string()
                } else {
                    status.yellow().to_string()
                };
                format!("{}  {}  {}  {}", min.dimmed(), status, name.bold(), category.cyan())
            } else {
                format!("{}  {}  {}  {}", min, status, name, category)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tab-separated matches for scripting: min_average, safe, name, category
pub fn format_opportunity_tsv(matches: &[OpportunityMatch]) -> String {
    matches
        .iter()
        .map(|m| {
            format!(
                "{}\t{}\t{}\t{}",
                format_grade(m.opportunity.min_average),
                m.is_safe,
                m.opportunity.name,
                m.opportunity.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short countdown: "J-5", "J-0", "3d ago", "?" when unknown
pub fn format_days(urgency: &DeadlineUrgency) -> String {
    match urgency.days_remaining {
        None => "?".to_string(),
        Some(days) if days < 0 => format!("{}d ago", -days),
        Some(days) => format!("J-{}", days),
    }
}

fn color_band(text: &str, band: UrgencyBand) -> String {
    match band {
        UrgencyBand::Expired => text.dimmed().to_string(),
        UrgencyBand::Urgent => text.red().bold().to_string(),
        UrgencyBand::Warning => text.yellow().to_string(),
        UrgencyBand::Open => text.green().to_string(),
    }
}

/// Format scholarships with deadline, countdown and urgency label
pub fn format_scholarship_table(statuses: &[ScholarshipStatus], use_colors: bool) -> String {
    if statuses.is_empty() {
        return "No scholarships found.".to_string();
    }

    // label (8) + countdown (8) + deadline (14) + 3 separators
    let budget = name_budget(8 + 8 + 14 + 6);

    statuses
        .iter()
        .map(|status| {
            let label = format!("{:<8}", status.urgency.label());
            let days = format!("{:>8}", format_days(&status.urgency));
            let deadline = format!("{:<14}", status.scholarship.deadline);
            let name = fit_name(
                &format!("{} ({})", status.scholarship.name, status.scholarship.provider),
                budget,
            );
            let eligibility = match status.eligible {
                Some(false) => " [not eligible]",
                _ => "",
            };
            if use_colors {
                format!(
                    "{}  {}  {}  {}{}",
                    color_band(&label, status.urgency.band),
                    days.bold(),
                    deadline.dimmed(),
                    name,
                    eligibility.red()
                )
            } else {
                format!("{}  {}  {}  {}{}", label, days, deadline, name, eligibility)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tab-separated scholarships: band, days (empty if unknown), deadline, name, provider
pub fn format_scholarship_tsv(statuses: &[ScholarshipStatus]) -> String {
    statuses
        .iter()
        .map(|status| {
            let days = status
                .urgency
                .days_remaining
                .map(|d| d.to_string())
                .unwrap_or_default();
            format!(
                "{}\t{}\t{}\t{}\t{}",
                status.urgency.label(),
                days,
                status.scholarship.deadline,
                status.scholarship.name,
                status.scholarship.provider
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quiz ranking followed by the matching programs for the top field
pub fn format_quiz_result(
    scores: &[FieldScore],
    recommendation: Option<&Recommendation>,
    use_colors: bool,
) -> String {
    let mut lines: Vec<String> = scores
        .iter()
        .enumerate()
        .map(|(idx, score)| {
            let rank = format!("{:>2}.", idx + 1);
            if use_colors && idx == 0 {
                format!("{} {} ({} pts)", rank, score.category.bold(), score.points)
            } else {
                format!("{} {} ({} pts)", rank, score.category, score.points)
            }
        })
        .collect();

    if let Some(recommendation) = recommendation {
        lines.push(String::new());
        lines.push(format!("Programs in {}:", recommendation.category));
        lines.push(format_opportunity_table(&recommendation.matches, use_colors));
    }

    lines.join("\n")
}

/// One saved student: inputs plus derived average/goal where available
pub fn format_record(
    record: &StudentRecord,
    average: Option<(f64, &Mention)>,
    goal: Option<&GoalOutcome>,
    use_colors: bool,
) -> String {
    let national = record
        .national
        .map(format_grade)
        .unwrap_or_else(|| "-".to_string());
    let header = if use_colors {
        format!("{} [{}]", record.name.bold(), record.id.dimmed())
    } else {
        format!("{} [{}]", record.name, record.id)
    };

    let mut lines = vec![
        header,
        format!(
            "  Regional: {}  Continuous: {}  National: {}",
            format_grade(record.regional),
            format_grade(record.continuous),
            national
        ),
    ];
    if let Some((avg, mention)) = average {
        lines.push(format!("  Average: {} ({})", format_grade(avg), mention.label));
    }
    if let Some(goal) = goal {
        let feasibility = if goal.is_feasible() { "" } else { " (out of reach)" };
        lines.push(format!(
            "  Target {}: needs {} at the national exam{}",
            format_grade(goal.target),
            format_grade(goal.required),
            feasibility
        ));
    }
    lines.push(format!(
        "  Updated: {}",
        record.updated_at.format("%Y-%m-%d %H:%M")
    ));
    lines.join("\n")
}

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::error::EngineError;

/// Days a deadline may lie in the past before it is read as next year's edition.
pub const DEFAULT_ROLLOVER_GRACE_DAYS: i64 = 30;
pub const URGENT_DAYS: i64 = 7;
pub const WARNING_DAYS: i64 = 30;

const MONTHS: [&str; 12] = [
    "janvier", "fevrier", "mars", "avril", "mai", "juin", "juillet", "aout", "septembre",
    "octobre", "novembre", "decembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyBand {
    Expired,
    Urgent,
    Warning,
    Open,
}

impl UrgencyBand {
    pub fn from_days(days_remaining: i64) -> Self {
        match days_remaining {
            d if d < 0 => UrgencyBand::Expired,
            0..=URGENT_DAYS => UrgencyBand::Urgent,
            d if d <= WARNING_DAYS => UrgencyBand::Warning,
            _ => UrgencyBand::Open,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyBand::Expired => "Expiré",
            UrgencyBand::Urgent => "Urgent",
            UrgencyBand::Warning => "Bientôt",
            UrgencyBand::Open => "Ouvert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineUrgency {
    pub band: UrgencyBand,
    /// `None` when the deadline text could not be read.
    pub days_remaining: Option<i64>,
    pub due: Option<NaiveDate>,
}

impl DeadlineUrgency {
    fn unknown() -> Self {
        Self {
            band: UrgencyBand::Open,
            days_remaining: None,
            due: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.band.label()
    }

    pub fn is_urgent(&self) -> bool {
        self.band == UrgencyBand::Urgent
    }

    pub fn is_known(&self) -> bool {
        self.days_remaining.is_some()
    }
}

fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'à' | 'â' => 'a',
            'û' | 'ù' | 'ü' => 'u',
            'ô' => 'o',
            'î' | 'ï' => 'i',
            other => other,
        })
        .collect()
}

/// Month number (1-12) for a French month name, accents optional.
pub fn parse_month(name: &str) -> Option<u32> {
    let folded = fold_accents(&name.trim().to_lowercase());
    MONTHS
        .iter()
        .position(|month| *month == folded)
        .map(|index| index as u32 + 1)
}

/// Parse "31 Juillet" (or "1er Août") into `(day, month)`.
pub fn parse_deadline(text: &str) -> Result<(u32, u32), EngineError> {
    let unparseable = || EngineError::UnparseableDeadline(text.to_string());

    let mut parts = text.split_whitespace();
    let (Some(day_part), Some(month_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(unparseable());
    };

    let day_part = day_part.strip_suffix("er").unwrap_or(day_part);
    let day: u32 = day_part.parse().map_err(|_| unparseable())?;
    if !(1..=31).contains(&day) {
        return Err(unparseable());
    }

    let month = parse_month(month_part).ok_or_else(unparseable)?;
    Ok((day, month))
}

/// Urgency of a yearly deadline relative to `today`.
///
/// The deadline is placed in `today`'s year. If that date is more than
/// `grace_days` behind, or does not exist that year (29 February), it is
/// taken to mean next year's edition. Text that cannot be read yields an
/// `Open` band with no day count.
pub fn deadline_urgency(text: &str, today: NaiveDate, grace_days: i64) -> DeadlineUrgency {
    let (day, month) = match parse_deadline(text) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%err, "deadline falls back to open");
            return DeadlineUrgency::unknown();
        }
    };

    // a leap day missing from this year may still exist next year
    let due = match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(due) if (today - due).num_days() <= grace_days => due,
        current => {
            let Some(next) = NaiveDate::from_ymd_opt(today.year() + 1, month, day) else {
                debug!(text, year = today.year() + 1, "deadline is not a calendar date");
                return DeadlineUrgency::unknown();
            };
            match current {
                Some(due) => debug!(text, %due, %next, "deadline rolled over to next year"),
                None => debug!(text, year = today.year(), %next, "deadline moved to next valid year"),
            }
            next
        }
    };

    let days_remaining = (due - today).num_days();
    DeadlineUrgency {
        band: UrgencyBand::from_days(days_remaining),
        days_remaining: Some(days_remaining),
        due: Some(due),
    }
}

/// [`deadline_urgency`] with the default 30-day grace window.
pub fn parse_deadline_urgency(text: &str, today: NaiveDate) -> DeadlineUrgency {
    deadline_urgency(text, today, DEFAULT_ROLLOVER_GRACE_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_month("Janvier"), Some(1));
        assert_eq!(parse_month("février"), Some(2));
        assert_eq!(parse_month("Fevrier"), Some(2));
        assert_eq!(parse_month("AOÛT"), Some(8));
        assert_eq!(parse_month("aout"), Some(8));
        assert_eq!(parse_month("Décembre"), Some(12));
        assert_eq!(parse_month("July"), None);
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(parse_deadline("31 Juillet").unwrap(), (31, 7));
        assert_eq!(parse_deadline("  05   Mai ").unwrap(), (5, 5));
        assert_eq!(parse_deadline("1er Août").unwrap(), (1, 8));
    }

    #[test]
    fn test_parse_deadline_rejects_garbage() {
        for text in ["", "Juillet", "31", "32 Juillet", "0 Mai", "trente Mai", "31 Jul", "31 Juillet 2024"] {
            assert!(
                matches!(parse_deadline(text), Err(EngineError::UnparseableDeadline(_))),
                "expected failure for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(UrgencyBand::from_days(-1), UrgencyBand::Expired);
        assert_eq!(UrgencyBand::from_days(0), UrgencyBand::Urgent);
        assert_eq!(UrgencyBand::from_days(7), UrgencyBand::Urgent);
        assert_eq!(UrgencyBand::from_days(8), UrgencyBand::Warning);
        assert_eq!(UrgencyBand::from_days(30), UrgencyBand::Warning);
        assert_eq!(UrgencyBand::from_days(31), UrgencyBand::Open);
    }

    #[test]
    fn test_urgent_deadline() {
        let urgency = parse_deadline_urgency("25 Mai", date(2024, 5, 20));
        assert_eq!(urgency.band, UrgencyBand::Urgent);
        assert_eq!(urgency.days_remaining, Some(5));
        assert!(urgency.is_urgent());
        assert_eq!(urgency.label(), "Urgent");
    }

    #[test]
    fn test_old_deadline_rolls_to_next_year() {
        let urgency = parse_deadline_urgency("01 Janvier", date(2024, 5, 20));
        assert_eq!(urgency.band, UrgencyBand::Open);
        assert_eq!(urgency.due, Some(date(2025, 1, 1)));
        assert_eq!(urgency.days_remaining, Some(226));
        assert!(!urgency.is_urgent());
    }

    #[test]
    fn test_recent_deadline_is_expired() {
        let urgency = parse_deadline_urgency("10 Mai", date(2024, 5, 20));
        assert_eq!(urgency.band, UrgencyBand::Expired);
        assert_eq!(urgency.days_remaining, Some(-10));
    }

    #[test]
    fn test_grace_window_edge() {
        // exactly 30 days behind stays in the current year
        let urgency = parse_deadline_urgency("20 Avril", date(2024, 5, 20));
        assert_eq!(urgency.band, UrgencyBand::Expired);
        assert_eq!(urgency.days_remaining, Some(-30));

        // 31 days behind rolls over
        let urgency = parse_deadline_urgency("19 Avril", date(2024, 5, 20));
        assert_eq!(urgency.due, Some(date(2025, 4, 19)));
    }

    #[test]
    fn test_custom_grace_window() {
        let urgency = deadline_urgency("10 Mai", date(2024, 5, 20), 5);
        assert_eq!(urgency.due, Some(date(2025, 5, 10)));
        assert_eq!(urgency.band, UrgencyBand::Open);
    }

    #[test]
    fn test_warning_deadline() {
        let urgency = parse_deadline_urgency("15 Juin", date(2024, 5, 20));
        assert_eq!(urgency.band, UrgencyBand::Warning);
        assert_eq!(urgency.days_remaining, Some(26));
    }

    #[test]
    fn test_year_end_rollover() {
        let urgency = parse_deadline_urgency("05 Janvier", date(2024, 12, 30));
        assert_eq!(urgency.due, Some(date(2025, 1, 5)));
        assert_eq!(urgency.band, UrgencyBand::Urgent);
    }

    #[test]
    fn test_unparseable_falls_back_to_open() {
        let urgency = parse_deadline_urgency("bientôt", date(2024, 5, 20));
        assert_eq!(urgency.band, UrgencyBand::Open);
        assert_eq!(urgency.days_remaining, None);
        assert!(!urgency.is_known());
        assert!(!urgency.is_urgent());
    }

    #[test]
    fn test_impossible_calendar_date_falls_back_to_open() {
        let urgency = parse_deadline_urgency("31 Février", date(2024, 1, 10));
        assert_eq!(urgency.band, UrgencyBand::Open);
        assert!(!urgency.is_known());

        let urgency = parse_deadline_urgency("29 Février", date(2024, 1, 10));
        assert_eq!(urgency.due, Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_leap_day_moves_to_next_leap_year() {
        let urgency = parse_deadline_urgency("29 Février", date(2023, 12, 15));
        assert_eq!(urgency.due, Some(date(2024, 2, 29)));
        assert_eq!(urgency.days_remaining, Some(76));
        assert_eq!(urgency.band, UrgencyBand::Open);

        // neither 2023 nor 2024 has one here
        let urgency = parse_deadline_urgency("29 Février", date(2022, 12, 15));
        assert!(!urgency.is_known());

        // past the grace window of a leap year, 2025 has no 29 February
        let urgency = parse_deadline_urgency("29 Février", date(2024, 6, 1));
        assert!(!urgency.is_known());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let today = date(2024, 5, 20);
        assert_eq!(
            parse_deadline_urgency("31 Juillet", today),
            parse_deadline_urgency("31 Juillet", today)
        );
    }
}

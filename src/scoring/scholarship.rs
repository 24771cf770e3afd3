use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deadline::{deadline_urgency, DeadlineUrgency};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scholarship {
    pub name: String,
    pub provider: String,
    /// Yearly deadline in "day month" form, e.g. "31 Juillet".
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScholarshipStatus<'a> {
    pub scholarship: &'a Scholarship,
    pub urgency: DeadlineUrgency,
    /// `None` when no average was given.
    pub eligible: Option<bool>,
}

/// Deadline urgency for every scholarship, in catalog order, recomputed against `today`.
pub fn assess_scholarships<'a>(
    scholarships: &'a [Scholarship],
    today: NaiveDate,
    grace_days: i64,
    average: Option<f64>,
) -> Vec<ScholarshipStatus<'a>> {
    scholarships
        .iter()
        .map(|scholarship| ScholarshipStatus {
            scholarship,
            urgency: deadline_urgency(&scholarship.deadline, today, grace_days),
            eligible: average.map(|avg| scholarship.min_average.map_or(true, |min| avg >= min)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::UrgencyBand;

    fn scholarship(name: &str, deadline: &str, min_average: Option<f64>) -> Scholarship {
        Scholarship {
            name: name.to_string(),
            provider: "Fondation".to_string(),
            deadline: deadline.to_string(),
            min_average,
        }
    }

    #[test]
    fn test_assess_keeps_order_and_bands() {
        let list = vec![
            scholarship("Merit", "25 Mai", Some(14.0)),
            scholarship("Open", "15 Septembre", None),
            scholarship("Broken", "sometime", None),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let statuses = assess_scholarships(&list, today, 30, None);

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].urgency.band, UrgencyBand::Urgent);
        assert_eq!(statuses[1].urgency.band, UrgencyBand::Open);
        assert_eq!(statuses[2].urgency.band, UrgencyBand::Open);
        assert!(!statuses[2].urgency.is_known());
        assert!(statuses.iter().all(|s| s.eligible.is_none()));
    }

    #[test]
    fn test_eligibility_against_average() {
        let list = vec![
            scholarship("Merit", "25 Mai", Some(14.0)),
            scholarship("Open", "15 Septembre", None),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let statuses = assess_scholarships(&list, today, 30, Some(13.99));
        assert_eq!(statuses[0].eligible, Some(false));
        assert_eq!(statuses[1].eligible, Some(true));

        let statuses = assess_scholarships(&list, today, 30, Some(14.0));
        assert_eq!(statuses[0].eligible, Some(true));
    }
}

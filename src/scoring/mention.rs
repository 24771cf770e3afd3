use serde::Serialize;

/// A qualitative tier derived from an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mention {
    pub label: &'static str,
    pub description: &'static str,
}

/// Bands ordered from highest lower bound to lowest. The last band must start at 0.
pub const MENTION_BANDS: [(f64, Mention); 5] = [
    (
        16.0,
        Mention {
            label: "Très Bien",
            description: "Excellent profile: open-access and highly selective schools are within reach.",
        },
    ),
    (
        14.0,
        Mention {
            label: "Bien",
            description: "Strong profile: most selective programs will consider the application.",
        },
    ),
    (
        12.0,
        Mention {
            label: "Assez Bien",
            description: "Solid profile: good odds for many schools, keep a safety choice.",
        },
    ),
    (
        10.0,
        Mention {
            label: "Passable",
            description: "Bac obtained: open-access faculties and some programs remain available.",
        },
    ),
    (
        0.0,
        Mention {
            label: "Ajourné",
            description: "Below the passing average: the retake session is the next step.",
        },
    ),
];

/// Highest band whose lower bound the average reaches.
pub fn classify_mention(average: f64) -> Mention {
    MENTION_BANDS
        .iter()
        .find(|(lower_bound, _)| average >= *lower_bound)
        .map(|(_, mention)| *mention)
        .unwrap_or(MENTION_BANDS[MENTION_BANDS.len() - 1].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_descending() {
        for pair in MENTION_BANDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
        assert_eq!(MENTION_BANDS[MENTION_BANDS.len() - 1].0, 0.0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(classify_mention(16.0).label, "Très Bien");
        assert_eq!(classify_mention(15.99).label, "Bien");
        assert_eq!(classify_mention(14.0).label, "Bien");
        assert_eq!(classify_mention(13.99).label, "Assez Bien");
        assert_eq!(classify_mention(12.0).label, "Assez Bien");
        assert_eq!(classify_mention(11.99).label, "Passable");
        assert_eq!(classify_mention(10.0).label, "Passable");
        assert_eq!(classify_mention(9.99).label, "Ajourné");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify_mention(20.0).label, "Très Bien");
        assert_eq!(classify_mention(0.0).label, "Ajourné");
    }

    #[test]
    fn test_nan_falls_to_lowest_band() {
        assert_eq!(classify_mention(f64::NAN).label, "Ajourné");
    }
}

use super::error::EngineError;

pub const REGIONAL_WEIGHT: f64 = 0.25;
pub const CONTINUOUS_WEIGHT: f64 = 0.25;
pub const NATIONAL_WEIGHT: f64 = 0.50;

pub const MAX_SCORE: f64 = 20.0;
/// Lowest target the goal solver accepts (a passing average).
pub const MIN_TARGET: f64 = 10.0;

/// A grade as a whole number of hundredths (14.37 -> 1437). Grades carry at most 2 decimals.
fn to_hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

fn from_hundredths(hundredths: i64) -> f64 {
    hundredths as f64 / 100.0
}

/// Integer division rounding halves away from zero. `den` must be positive and even.
fn div_round(num: i64, den: i64) -> i64 {
    let half = den / 2;
    if num >= 0 {
        (num + half) / den
    } else {
        -((-num + half) / den)
    }
}

fn check_range(field: &'static str, value: f64, low: f64, high: f64) -> Result<f64, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, value, "must be a finite number"));
    }
    if value < low || value > high {
        return Err(EngineError::invalid(
            field,
            value,
            format!("must be between {} and {}", low, high),
        ));
    }
    Ok(value)
}

/// Parse a score typed by a user. Accepts a French decimal comma ("14,5").
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, EngineError> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(EngineError::invalid(field, text, "is empty"));
    }
    normalized
        .parse::<f64>()
        .map_err(|_| EngineError::invalid(field, text, "is not a number"))
}

/// The three graded components of a Bac average, each checked to lie in [0, 20].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    regional: f64,
    continuous: f64,
    national: f64,
}

impl ScoreInput {
    pub fn new(regional: f64, continuous: f64, national: f64) -> Result<Self, EngineError> {
        Ok(Self {
            regional: check_range("regional", regional, 0.0, MAX_SCORE)?,
            continuous: check_range("continuous", continuous, 0.0, MAX_SCORE)?,
            national: check_range("national", national, 0.0, MAX_SCORE)?,
        })
    }

    pub fn parse(regional: &str, continuous: &str, national: &str) -> Result<Self, EngineError> {
        Self::new(
            parse_number("regional", regional)?,
            parse_number("continuous", continuous)?,
            parse_number("national", national)?,
        )
    }

    pub fn regional(&self) -> f64 {
        self.regional
    }

    pub fn continuous(&self) -> f64 {
        self.continuous
    }

    pub fn national(&self) -> f64 {
        self.national
    }

    /// Weighted average rounded to 2 decimals, halves away from zero (15.125 -> 15.13).
    ///
    /// Worked in exact hundredths: 0.25r + 0.25c + 0.50n = (r + c + 2n) / 4.
    pub fn average(&self) -> f64 {
        let quarters = to_hundredths(self.regional)
            + to_hundredths(self.continuous)
            + 2 * to_hundredths(self.national);
        from_hundredths(div_round(quarters, 4))
    }
}

/// Known regional and continuous scores plus the average the student aims for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalInput {
    regional: f64,
    continuous: f64,
    target: f64,
}

impl GoalInput {
    pub fn new(regional: f64, continuous: f64, target: f64) -> Result<Self, EngineError> {
        Ok(Self {
            regional: check_range("regional", regional, 0.0, MAX_SCORE)?,
            continuous: check_range("continuous", continuous, 0.0, MAX_SCORE)?,
            target: check_range("target", target, MIN_TARGET, MAX_SCORE)?,
        })
    }

    pub fn parse(regional: &str, continuous: &str, target: &str) -> Result<Self, EngineError> {
        Self::new(
            parse_number("regional", regional)?,
            parse_number("continuous", continuous)?,
            parse_number("target", target)?,
        )
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Solve for the national exam score. The result is not clamped to 20.
    ///
    /// (t - 0.25(r + c)) / 0.50 = (4t - r - c) / 2, in exact hundredths.
    pub fn solve(&self) -> GoalOutcome {
        let halves = 4 * to_hundredths(self.target)
            - to_hundredths(self.regional)
            - to_hundredths(self.continuous);
        GoalOutcome {
            target: self.target,
            required: from_hundredths(div_round(halves, 2)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalOutcome {
    pub target: f64,
    /// National exam score needed. Above 20 means the target is out of reach.
    pub required: f64,
}

impl GoalOutcome {
    pub fn is_feasible(&self) -> bool {
        self.required <= MAX_SCORE
    }
}

/// Weighted Bac average: 25% regional, 25% continuous, 50% national.
pub fn compute_average(regional: f64, continuous: f64, national: f64) -> Result<f64, EngineError> {
    Ok(ScoreInput::new(regional, continuous, national)?.average())
}

/// National exam score needed to reach `target`, surfaced unclamped.
pub fn solve_required_national(
    regional: f64,
    continuous: f64,
    target: f64,
) -> Result<f64, EngineError> {
    Ok(GoalInput::new(regional, continuous, target)?.solve().required)
}

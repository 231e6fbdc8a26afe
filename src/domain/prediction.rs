use serde::Serialize;

/// Number of indicator columns the model was trained on.
pub const FEATURE_COUNT: usize = 60;

/// Number of output classes, in the fixed order {down, hold, up}.
pub const CLASS_COUNT: usize = 3;

/// Predicted movement of the next trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Hold,
    Up,
}

impl Direction {
    /// Signed encoding used by downstream consumers: -1, 0, +1.
    pub fn signed(&self) -> i8 {
        match self {
            Direction::Down => -1,
            Direction::Hold => 0,
            Direction::Up => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Down => "DOWN",
            Direction::Hold => "HOLD",
            Direction::Up => "UP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Direction::Down => "expected decline",
            Direction::Hold => "expected stability",
            Direction::Up => "expected increase",
        }
    }

    fn from_class_index(index: usize) -> Self {
        match index {
            0 => Direction::Down,
            1 => Direction::Hold,
            _ => Direction::Up,
        }
    }
}

/// One classification outcome: the winning direction plus the raw
/// per-class probabilities it was derived from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Prediction {
    pub direction: Direction,
    pub prob_down: f32,
    pub prob_hold: f32,
    pub prob_up: f32,
    /// Probability mass of the winning class.
    pub confidence: f32,
}

impl Prediction {
    /// Derives the direction by argmax over the raw probabilities.
    ///
    /// The scan uses strict `>` in class order {down, hold, up}, so exact
    /// ties keep the earlier class. The probabilities are passed through
    /// untouched; no re-normalization.
    pub fn from_probabilities(probs: [f32; CLASS_COUNT]) -> Self {
        let mut winner = 0;
        let mut confidence = probs[0];

        for (class, &p) in probs.iter().enumerate().skip(1) {
            if p > confidence {
                winner = class;
                confidence = p;
            }
        }

        Self {
            direction: Direction::from_class_index(winner),
            prob_down: probs[0],
            prob_hold: probs[1],
            prob_up: probs[2],
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_wins() {
        let p = Prediction::from_probabilities([0.82, 0.10, 0.08]);
        assert_eq!(p.direction, Direction::Down);
        assert_eq!(p.direction.signed(), -1);
        assert!((p.confidence - 0.82).abs() < f32::EPSILON);
    }

    #[test]
    fn test_up_wins() {
        let p = Prediction::from_probabilities([0.10, 0.10, 0.80]);
        assert_eq!(p.direction, Direction::Up);
        assert_eq!(p.direction.signed(), 1);
        assert!((p.confidence - 0.80).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hold_wins() {
        let p = Prediction::from_probabilities([0.20, 0.55, 0.25]);
        assert_eq!(p.direction, Direction::Hold);
        assert_eq!(p.direction.signed(), 0);
        assert!((p.confidence - 0.55).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tie_resolves_to_earlier_class() {
        // down ties hold: the earlier class keeps the win
        let p = Prediction::from_probabilities([0.34, 0.34, 0.32]);
        assert_eq!(p.direction, Direction::Down);

        // hold ties up
        let p = Prediction::from_probabilities([0.20, 0.40, 0.40]);
        assert_eq!(p.direction, Direction::Hold);

        // three-way tie
        let p = Prediction::from_probabilities([0.33, 0.33, 0.33]);
        assert_eq!(p.direction, Direction::Down);
    }

    #[test]
    fn test_confidence_is_max_probability() {
        let probs = [0.25, 0.45, 0.30];
        let p = Prediction::from_probabilities(probs);
        let max = probs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((p.confidence - max).abs() < f32::EPSILON);
    }

    #[test]
    fn test_raw_probabilities_pass_through() {
        // Not normalized upstream; must not be normalized here either
        let p = Prediction::from_probabilities([0.5, 0.7, 0.9]);
        assert!((p.prob_down - 0.5).abs() < f32::EPSILON);
        assert!((p.prob_hold - 0.7).abs() < f32::EPSILON);
        assert!((p.prob_up - 0.9).abs() < f32::EPSILON);
        assert_eq!(p.direction, Direction::Up);
    }
}

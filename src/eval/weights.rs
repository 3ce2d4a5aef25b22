//! Evaluator weight table.

use serde::{Deserialize, Serialize};

/// Feature weights for the static position evaluator.
///
/// Every weight is a magnitude; the evaluator applies the sign. Retuned
/// tables should keep the default ordering (bar > bear-off readiness >
/// borne off > safe point > opponent blot > own blot > progress) to keep
/// the AI's character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per piece borne off (own +, opponent -).
    pub borne_off: f64,

    /// Per piece on the bar (own -, opponent +).
    pub bar: f64,

    /// Per own point holding two or more pieces.
    pub safe_point: f64,

    /// Per own point holding a single piece (penalty).
    pub blot: f64,

    /// Per own occupied point, times its advance (0-23) towards home.
    pub progress: f64,

    /// Per opponent point holding a single piece.
    pub opponent_blot: f64,

    /// When a side may bear off (own +, opponent -).
    pub bear_off_ready: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            borne_off: 10.0,
            bar: 20.0,
            safe_point: 5.0,
            blot: 2.0,
            progress: 0.5,
            opponent_blot: 3.0,
            bear_off_ready: 15.0,
        }
    }
}

impl EvalWeights {
    /// Set the progress weight.
    #[must_use]
    pub fn with_progress(mut self, weight: f64) -> Self {
        self.progress = weight;
        self
    }

    /// Set the bar weight.
    #[must_use]
    pub fn with_bar(mut self, weight: f64) -> Self {
        self.bar = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = EvalWeights::default();
        assert_eq!(weights.borne_off, 10.0);
        assert_eq!(weights.bar, 20.0);
        assert_eq!(weights.safe_point, 5.0);
        assert_eq!(weights.blot, 2.0);
        assert_eq!(weights.progress, 0.5);
        assert_eq!(weights.opponent_blot, 3.0);
        assert_eq!(weights.bear_off_ready, 15.0);
    }

    #[test]
    fn test_serialization() {
        let weights = EvalWeights::default().with_progress(0.25).with_bar(30.0);
        let json = serde_json::to_string(&weights).unwrap();
        let deserialized: EvalWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, deserialized);
    }
}

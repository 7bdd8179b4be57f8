//! Confidence values attached to an assessment.
//!
//! The rule engine has no notion of model certainty, so confidence is a
//! display value. The randomized source reproduces the intake app's
//! behaviour; the boundary source is a reproducible alternative.

use medtouch_config::{ConfidenceMode, ScoringConfig};
use rand::Rng;

use crate::routing::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};

/// Produces a confidence percentage for a clamped score.
pub trait ConfidenceSource: Send + Sync {
    fn confidence(&self, risk_score: u32) -> f64;

    /// Whether repeated calls with the same score return the same value.
    fn is_deterministic(&self) -> bool;
}

/// Build the source selected in config.
pub fn from_config(cfg: &ScoringConfig) -> Box<dyn ConfidenceSource> {
    match cfg.confidence_mode {
        ConfidenceMode::Randomized => Box::new(RandomConfidence::new(cfg.confidence_min, cfg.confidence_span)),
        ConfidenceMode::Deterministic => Box::new(BoundaryConfidence::new(cfg.confidence_min, cfg.confidence_span)),
    }
}

// ── Randomized ─────────────────────────────────────────────────────────────

/// Uniform draw from `[min, min + span)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomConfidence {
    pub min: f64,
    pub span: f64,
}

impl RandomConfidence {
    pub fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }
}

impl Default for RandomConfidence {
    fn default() -> Self {
        Self::new(75.0, 15.0)
    }
}

impl ConfidenceSource for RandomConfidence {
    fn confidence(&self, _risk_score: u32) -> f64 {
        if self.span <= 0.0 {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..self.min + self.span)
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

// ── Boundary distance ──────────────────────────────────────────────────────

/// `min + span * d / 30`, where `d` is the distance from the score to the
/// nearest level boundary, capped at 30.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryConfidence {
    pub min: f64,
    pub span: f64,
}

const MAX_BOUNDARY_DISTANCE: u32 = 30;

impl BoundaryConfidence {
    pub fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }
}

impl Default for BoundaryConfidence {
    fn default() -> Self {
        Self::new(75.0, 15.0)
    }
}

impl ConfidenceSource for BoundaryConfidence {
    fn confidence(&self, risk_score: u32) -> f64 {
        let d = risk_score
            .abs_diff(MEDIUM_THRESHOLD)
            .min(risk_score.abs_diff(HIGH_THRESHOLD))
            .min(MAX_BOUNDARY_DISTANCE);
        self.min + self.span * f64::from(d) / f64::from(MAX_BOUNDARY_DISTANCE)
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

// ── Fixed ──────────────────────────────────────────────────────────────────

/// Always the same value. Handy in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfidence(pub f64);

impl ConfidenceSource for FixedConfidence {
    fn confidence(&self, _risk_score: u32) -> f64 {
        self.0
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_range() {
        let src = RandomConfidence::default();
        for _ in 0..1000 {
            let c = src.confidence(50);
            assert!((75.0..90.0).contains(&c), "got {c}");
        }
        assert!(!src.is_deterministic());
    }

    #[test]
    fn test_random_zero_span_returns_min() {
        assert_eq!(RandomConfidence::new(80.0, 0.0).confidence(10), 80.0);
    }

    #[test]
    fn test_boundary_extremes() {
        let src = BoundaryConfidence::default();
        // On a boundary: least confident
        assert_eq!(src.confidence(30), 75.0);
        assert_eq!(src.confidence(60), 75.0);
        // Far from any boundary
        assert_eq!(src.confidence(0), 90.0);
        assert_eq!(src.confidence(100), 90.0);
        // Midway between the two boundaries
        assert_eq!(src.confidence(45), 82.5);
    }

    #[test]
    fn test_boundary_is_repeatable() {
        let src = BoundaryConfidence::default();
        assert_eq!(src.confidence(72), src.confidence(72));
        assert!(src.is_deterministic());
    }

    #[test]
    fn test_from_config_honours_mode() {
        let cfg = ScoringConfig {
            confidence_mode: ConfidenceMode::Deterministic,
            ..Default::default()
        };
        assert!(from_config(&cfg).is_deterministic());
        assert!(!from_config(&ScoringConfig::default()).is_deterministic());
    }
}

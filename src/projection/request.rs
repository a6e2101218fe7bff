//! Projection request parameters and normalization

use super::{
    DEFAULT_DEDUCTION_RATE_A, DEFAULT_DEDUCTION_RATE_B, DEFAULT_GROWTH_RATE, DEFAULT_INITIAL,
    DEFAULT_PERIODS, MAX_PERIODS,
};
use serde::{Deserialize, Serialize};

/// Parameters for a side-by-side projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Starting principal. Negative values are clamped to 0.
    #[serde(default = "default_initial")]
    pub initial: f64,

    /// Gross per-period growth rate as a fraction (0.07 = 7%)
    /// May be negative; passed through unvalidated
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    /// Per-period deduction rate for series A, subtracted from the growth
    /// rate before compounding
    #[serde(default = "default_deduction_rate_a")]
    pub deduction_rate_a: f64,

    /// Per-period deduction rate for series B
    #[serde(default = "default_deduction_rate_b")]
    pub deduction_rate_b: f64,

    /// Number of compounding periods. Clamped into [1, MAX_PERIODS].
    #[serde(default = "default_periods")]
    pub periods: i64,
}

fn default_initial() -> f64 { DEFAULT_INITIAL }
fn default_growth_rate() -> f64 { DEFAULT_GROWTH_RATE }
fn default_deduction_rate_a() -> f64 { DEFAULT_DEDUCTION_RATE_A }
fn default_deduction_rate_b() -> f64 { DEFAULT_DEDUCTION_RATE_B }
fn default_periods() -> i64 { DEFAULT_PERIODS }

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            growth_rate: DEFAULT_GROWTH_RATE,
            deduction_rate_a: DEFAULT_DEDUCTION_RATE_A,
            deduction_rate_b: DEFAULT_DEDUCTION_RATE_B,
            periods: DEFAULT_PERIODS,
        }
    }
}

impl ProjectionRequest {
    /// Return a copy with out-of-range values silently corrected: a negative
    /// principal becomes 0 and the horizon is clamped into [1, MAX_PERIODS].
    ///
    /// Growth and deduction rates are unconstrained and pass through as-is.
    /// The corrected values are what `compute_projection` echoes back, so a
    /// caller can detect the correction by comparing requested vs. echoed.
    pub fn normalized(&self) -> Self {
        Self {
            initial: self.initial.max(0.0),
            periods: self.periods.clamp(1, MAX_PERIODS),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let request: ProjectionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, ProjectionRequest::default());
        assert_eq!(request.initial, 1000.0);
        assert_eq!(request.growth_rate, 0.07);
        assert_eq!(request.deduction_rate_a, 0.0);
        assert_eq!(request.deduction_rate_b, 0.02);
        assert_eq!(request.periods, 30);
    }

    #[test]
    fn test_partial_json_keeps_remaining_defaults() {
        let request: ProjectionRequest =
            serde_json::from_str(r#"{"initial": 250.0, "periods": 5}"#).unwrap();
        assert_eq!(request.initial, 250.0);
        assert_eq!(request.periods, 5);
        assert_eq!(request.growth_rate, 0.07);
        assert_eq!(request.deduction_rate_b, 0.02);
    }

    #[test]
    fn test_normalized_clamps_principal_and_horizon() {
        let request = ProjectionRequest {
            initial: -50.0,
            periods: 0,
            ..Default::default()
        };
        let normalized = request.normalized();
        assert_eq!(normalized.initial, 0.0);
        assert_eq!(normalized.periods, 1);

        // Rates pass through untouched, even when out of [0, 1]
        let wild = ProjectionRequest {
            growth_rate: -0.5,
            deduction_rate_a: 2.0,
            ..Default::default()
        };
        let normalized = wild.normalized();
        assert_eq!(normalized.growth_rate, -0.5);
        assert_eq!(normalized.deduction_rate_a, 2.0);
    }

    #[test]
    fn test_normalized_caps_horizon() {
        let request = ProjectionRequest {
            periods: 5000,
            ..Default::default()
        };
        assert_eq!(request.normalized().periods, MAX_PERIODS);
    }

    #[test]
    fn test_in_range_request_is_unchanged() {
        let request = ProjectionRequest::default();
        assert_eq!(request.normalized(), request);
    }
}

//! Projection result types returned to callers

use super::request::ProjectionRequest;
use serde::{Deserialize, Serialize};

/// The two balance series being compared, one per deduction rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPair {
    /// Balances compounded at `growth_rate - deduction_rate_a`
    pub a: Vec<f64>,

    /// Balances compounded at `growth_rate - deduction_rate_b`
    pub b: Vec<f64>,
}

/// Result of a side-by-side projection
///
/// Both series and the index share the same length, `periods + 1`: the
/// balance at the start of period 0 through the end of the final period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// The request parameters after normalization, returned so callers can
    /// observe any clamping that was applied
    pub echoed_inputs: ProjectionRequest,

    /// Period labels 0..=periods, shared by both series
    pub period_index: Vec<i64>,

    /// The two balance series
    pub series: SeriesPair,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_projection;

    #[test]
    fn test_serialized_field_names() {
        let result = compute_projection(&ProjectionRequest::default());
        let value = serde_json::to_value(&result).unwrap();

        let inputs = &value["echoed_inputs"];
        assert_eq!(inputs["initial"], 1000.0);
        assert_eq!(inputs["growth_rate"], 0.07);
        assert_eq!(inputs["deduction_rate_a"], 0.0);
        assert_eq!(inputs["deduction_rate_b"], 0.02);
        assert_eq!(inputs["periods"], 30);

        assert_eq!(value["period_index"][0], 0);
        assert_eq!(value["period_index"][30], 30);
        assert_eq!(value["series"]["a"][0], 1000.0);
        assert_eq!(value["series"]["b"][0], 1000.0);
    }
}

//! Compounding engine producing the side-by-side balance series

use super::output::{ProjectionResult, SeriesPair};
use super::request::ProjectionRequest;

/// Project a single balance series.
///
/// Compounds `initial` at `growth_rate - deduction_rate` per period and
/// returns the balance at every period boundary, so the result has
/// `periods + 1` elements with the starting principal at index 0. Balances
/// carry full floating-point precision; no rounding or currency semantics
/// are applied.
pub fn project(initial: f64, growth_rate: f64, deduction_rate: f64, periods: u32) -> Vec<f64> {
    let net_rate = growth_rate - deduction_rate;
    let mut balances = Vec::with_capacity(periods as usize + 1);
    let mut balance = initial;
    balances.push(balance);
    for _ in 0..periods {
        balance *= 1.0 + net_rate;
        balances.push(balance);
    }
    balances
}

/// Run the side-by-side projection for a request.
///
/// The request is normalized first (see [`ProjectionRequest::normalized`])
/// and the normalized parameters are echoed in the result. Both series share
/// one period index since they share the same horizon.
pub fn compute_projection(request: &ProjectionRequest) -> ProjectionResult {
    let request = request.normalized();
    let periods = request.periods as u32;

    let series = SeriesPair {
        a: project(
            request.initial,
            request.growth_rate,
            request.deduction_rate_a,
            periods,
        ),
        b: project(
            request.initial,
            request.growth_rate,
            request.deduction_rate_b,
            periods,
        ),
    };
    let period_index = (0..=request.periods).collect();

    ProjectionResult {
        echoed_inputs: request,
        period_index,
        series,
    }
}

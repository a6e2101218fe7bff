//! Projection engine for side-by-side deduction comparisons

mod engine;
mod output;
mod request;

pub use engine::{compute_projection, project};
pub use output::{ProjectionResult, SeriesPair};
pub use request::ProjectionRequest;

// ============================================================================
// Default Projection Parameters
// ============================================================================
// These are the parameter values substituted when a caller omits a field.
// - Series A defaults to a zero deduction so it shows the gross outcome
// - Series B defaults to a 2% deduction for the side-by-side comparison

/// Default starting principal
pub const DEFAULT_INITIAL: f64 = 1000.0;

/// Default gross per-period growth rate (7%)
pub const DEFAULT_GROWTH_RATE: f64 = 0.07;

/// Default deduction rate for series A (no deduction)
pub const DEFAULT_DEDUCTION_RATE_A: f64 = 0.0;

/// Default deduction rate for series B (2%)
pub const DEFAULT_DEDUCTION_RATE_B: f64 = 0.02;

/// Default projection horizon in periods
pub const DEFAULT_PERIODS: i64 = 30;

/// Upper bound on the projection horizon. Longer requests are clamped, and
/// the clamped value is visible to the caller through `echoed_inputs`.
pub const MAX_PERIODS: i64 = 1000;

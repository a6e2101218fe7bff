//! HTTP transport for the simulators API
//!
//! Routes, each also served under an `/api` prefix so the handler can sit
//! behind a path-preserving proxy:
//! - `GET /health` - process liveness
//! - `GET /simulators/linear` - echo a slope parameter
//! - `GET /simulators/investment` - side-by-side deduction projection
//!
//! All parameters arrive as URL query strings with documented defaults; all
//! responses are JSON with permissive CORS headers.

mod handler;
mod params;

pub use handler::route;
pub use params::ApiError;

//! Query parameter parsing with per-parameter defaults

use crate::projection::ProjectionRequest;
use lambda_http::{Request, RequestExt};
use thiserror::Error;

/// Rejection for a query parameter that fails numeric parsing.
///
/// Parameter *types* are a transport concern: the projection engine itself
/// never fails, so this is the only error the API can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid value for parameter `{name}`: `{value}`")]
    InvalidParameter { name: &'static str, value: String },
}

/// Parse an optional float parameter; `None` means the caller omitted it
pub(crate) fn parse_f64(name: &'static str, raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ApiError::InvalidParameter {
                name,
                value: value.to_string(),
            }),
    }
}

/// Parse an optional integer parameter; `None` means the caller omitted it
pub(crate) fn parse_i64(name: &'static str, raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::InvalidParameter {
                name,
                value: value.to_string(),
            }),
    }
}

/// Build a projection request from query parameters, substituting the
/// documented defaults for anything the caller omitted
pub(crate) fn projection_request(event: &Request) -> Result<ProjectionRequest, ApiError> {
    let params = event.query_string_parameters();
    let mut request = ProjectionRequest::default();

    if let Some(initial) = parse_f64("initial", params.first("initial"))? {
        request.initial = initial;
    }
    if let Some(growth_rate) = parse_f64("growth_rate", params.first("growth_rate"))? {
        request.growth_rate = growth_rate;
    }
    if let Some(rate) = parse_f64("deduction_rate_a", params.first("deduction_rate_a"))? {
        request.deduction_rate_a = rate;
    }
    if let Some(rate) = parse_f64("deduction_rate_b", params.first("deduction_rate_b"))? {
        request.deduction_rate_b = rate;
    }
    if let Some(periods) = parse_i64("periods", params.first("periods"))? {
        request.periods = periods;
    }

    Ok(request)
}

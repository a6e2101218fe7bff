//! Route dispatch and response rendering

use super::params::{self, ApiError};
use crate::projection::compute_projection;
use lambda_http::http::response::Builder;
use lambda_http::http::Method;
use lambda_http::{Body, Error, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::json;

/// Default slope for the linear echo route
const DEFAULT_SLOPE: f64 = 1.0;

/// Handle one HTTP request.
///
/// Preflight `OPTIONS` requests are answered for every path; anything else
/// must be a `GET` on one of the known routes. Unknown paths produce a JSON
/// 404 and malformed numeric parameters a JSON 400.
pub async fn route(event: Request) -> Result<Response<Body>, Error> {
    if event.method() == Method::OPTIONS {
        return preflight();
    }

    let raw_path = event.raw_http_path().to_string();
    let path = strip_api_prefix(&raw_path);

    if event.method() != Method::GET {
        log::warn!("{} {} -> 405", event.method(), raw_path);
        return json_response(405, &json!({ "error": "method not allowed" }));
    }

    log::info!("GET {}", raw_path);
    match path {
        "/health" => json_response(200, &json!({ "status": "ok" })),
        "/simulators/linear" => linear(&event),
        "/simulators/investment" => investment(&event),
        _ => json_response(404, &json!({ "error": "not found" })),
    }
}

/// Echo the slope parameter unchanged
fn linear(event: &Request) -> Result<Response<Body>, Error> {
    let query = event.query_string_parameters();
    match params::parse_f64("m", query.first("m")) {
        Ok(m) => json_response(200, &json!({ "m": m.unwrap_or(DEFAULT_SLOPE) })),
        Err(err) => bad_request(err),
    }
}

/// Run the side-by-side projection for the caller's parameters
fn investment(event: &Request) -> Result<Response<Body>, Error> {
    match params::projection_request(event) {
        Ok(request) => {
            let result = compute_projection(&request);
            log::info!(
                "investment projection: initial={}, growth_rate={}, deductions=({}, {}), periods={}",
                result.echoed_inputs.initial,
                result.echoed_inputs.growth_rate,
                result.echoed_inputs.deduction_rate_a,
                result.echoed_inputs.deduction_rate_b,
                result.echoed_inputs.periods,
            );
            json_response(200, &result)
        }
        Err(err) => bad_request(err),
    }
}

fn bad_request(err: ApiError) -> Result<Response<Body>, Error> {
    log::warn!("rejected request: {err}");
    json_response(400, &json!({ "error": err.to_string() }))
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = with_cors(Response::builder().status(status))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body)?))?;
    Ok(response)
}

fn preflight() -> Result<Response<Body>, Error> {
    let response = with_cors(Response::builder().status(204)).body(Body::Empty)?;
    Ok(response)
}

/// Permissive CORS, mirroring the browser frontend's needs: any origin,
/// any method, any headers, credentials allowed
fn with_cors(builder: Builder) -> Builder {
    builder
        .header("access-control-allow-origin", "*")
        .header("access-control-allow-methods", "*")
        .header("access-control-allow-headers", "*")
        .header("access-control-allow-credentials", "true")
}

/// Routes are reachable both bare and behind an `/api` prefix
fn strip_api_prefix(path: &str) -> &str {
    match path.strip_prefix("/api") {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

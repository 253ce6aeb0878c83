//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::domain::id::Namespace;
use crate::infrastructure::id::IdGenerator;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Random bytes in generated request IDs
const REQUEST_ID_BYTES: usize = 12;

/// Log each request and tag it with a request ID.
///
/// An incoming `x-request-id` is kept; otherwise an identifier in the
/// `request` namespace is minted from the configured generator and echoed on
/// the response. `TraceLayer` owns the span, so none is created here.
pub async fn logging_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = ensure_request_id(state.id_service.generator(), &mut request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        user_agent = %header_str(&request, "user-agent"),
        "Incoming request"
    );

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn header_str<'a>(request: &'a Request<Body>, name: &str) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

fn ensure_request_id(generator: &IdGenerator, request: &mut Request<Body>) -> String {
    if let Some(existing) = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        return existing.to_string();
    }

    match generator.new_id_with_length(Namespace::Request, REQUEST_ID_BYTES) {
        Ok(id) => {
            if let Ok(value) = HeaderValue::from_str(id.as_str()) {
                request.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            id.into_string()
        }
        Err(e) => {
            warn!(error = %e, "Could not mint request ID");
            "-".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::id::PrefixRegistry;

    #[test]
    fn test_keeps_incoming_request_id() {
        let mut request = Request::builder()
            .header(REQUEST_ID_HEADER, "req_upstream")
            .body(Body::empty())
            .unwrap();

        assert_eq!(
            ensure_request_id(&IdGenerator::default(), &mut request),
            "req_upstream"
        );
    }

    #[test]
    fn test_mints_request_id() {
        let mut request = Request::builder().body(Body::empty()).unwrap();

        let id = ensure_request_id(&IdGenerator::default(), &mut request);
        assert!(id.starts_with("req_"));
        assert_eq!(
            request.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap(),
            id
        );
    }

    #[test]
    fn test_mints_request_id_with_configured_prefix() {
        let registry =
            PrefixRegistry::with_overrides([(Namespace::Request, "rq".to_string())]).unwrap();
        let generator = IdGenerator::new(Arc::new(registry));
        let mut request = Request::builder().body(Body::empty()).unwrap();

        let id = ensure_request_id(&generator, &mut request);
        assert!(id.starts_with("rq_"), "unexpected id {}", id);
    }

    #[test]
    fn test_header_str_default() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(header_str(&request, "user-agent"), "-");
    }
}

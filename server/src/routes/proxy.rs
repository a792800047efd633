//! `/api/*` forwarder.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls fixed relative endpoints such as
//! `/api/knowledge/categories/` and reads the CSRF token from a cookie on the
//! page's own origin. This handler relays those calls to the backend so both
//! stay same-origin. It implements no backend semantics: method, path, query,
//! status and body pass through unchanged, and only an allow-list of headers
//! crosses in either direction.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers relayed to the backend.
static REQUEST_HEADERS: [HeaderName; 6] = [
    header::ACCEPT,
    header::CONTENT_TYPE,
    header::COOKIE,
    HeaderName::from_static("x-csrftoken"),
    header::ORIGIN,
    header::REFERER,
];

/// Response headers relayed back to the browser.
static RESPONSE_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::SET_COOKIE, header::LOCATION];

/// Forward one request to the backend and relay its response.
///
/// # Errors
///
/// Returns [`ProxyError::Unavailable`] when the backend cannot be reached or
/// its response body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_request_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let relayed = forwarded_response_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, status = status.as_u16(), "backend returned server error");
    } else {
        tracing::debug!(%method, %url, status = status.as_u16(), "backend responded");
    }
    Ok((status, relayed, bytes).into_response())
}

/// Backend URL for an incoming request: base URL plus original path and query.
pub(crate) fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

pub(crate) fn forwarded_request_headers(incoming: &HeaderMap) -> HeaderMap {
    copy_allowed(incoming, &REQUEST_HEADERS)
}

pub(crate) fn forwarded_response_headers(upstream: &HeaderMap) -> HeaderMap {
    copy_allowed(upstream, &RESPONSE_HEADERS)
}

/// Multi-valued headers such as `set-cookie` keep every value in order.
fn copy_allowed(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

//! REST API helpers for the knowledge-base and diagnosis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns an error since these endpoints
//! are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Each operation first builds an [`ApiRequest`] (method, URL, payload) with a
//! pure builder, then hands it to a single transport function. Builders are
//! what the tests pin down; transport only knows how to speak HTTP.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to `Err(message)`. The message is the backend's
//! `{"error": ...}` text when present, otherwise [`FALLBACK_ERROR_MESSAGE`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{ApiErrorBody, Category, DiagnosisRequest, DiagnosisResult, KnowledgeEntry, NewCategory, NewKnowledge};

pub const ANALYZE_ENDPOINT: &str = "/api/diagnosis/cases/analyze/";
pub const CATEGORIES_ENDPOINT: &str = "/api/knowledge/categories/";
pub const KNOWLEDGE_ENDPOINT: &str = "/api/knowledge/knowledge/";

/// Header Django reads the anti-forgery token from.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Shown when a failed response carries no usable `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unknown error";

#[cfg(feature = "hydrate")]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request body in the encoding the endpoint expects.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Empty,
    Json(serde_json::Value),
    /// Already `application/x-www-form-urlencoded`.
    Form(String),
}

/// A fully described backend call, independent of transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub payload: Payload,
}

impl ApiRequest {
    /// Mutating calls must carry the CSRF header.
    pub fn needs_csrf(&self) -> bool {
        self.method != Method::Get
    }
}

// =============================================================================
// REQUEST BUILDERS
// =============================================================================

pub fn list_categories_request() -> ApiRequest {
    ApiRequest { method: Method::Get, url: CATEGORIES_ENDPOINT.to_owned(), payload: Payload::Empty }
}

pub fn create_category_request(category: &NewCategory) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: CATEGORIES_ENDPOINT.to_owned(),
        payload: Payload::Form(form_encode(&[("name", &category.name), ("description", &category.description)])),
    }
}

/// Knowledge list, optionally narrowed by the backend to one category.
pub fn list_knowledge_request(category_id: Option<i64>) -> ApiRequest {
    let url = match category_id {
        Some(id) => format!("{KNOWLEDGE_ENDPOINT}?category_id={id}"),
        None => KNOWLEDGE_ENDPOINT.to_owned(),
    };
    ApiRequest { method: Method::Get, url, payload: Payload::Empty }
}

pub fn create_knowledge_request(knowledge: &NewKnowledge) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: KNOWLEDGE_ENDPOINT.to_owned(),
        payload: Payload::Form(form_encode(&[
            ("category", &knowledge.category),
            ("title", &knowledge.title),
            ("symptoms", &knowledge.symptoms),
            ("solution", &knowledge.solution),
        ])),
    }
}

pub fn analyze_request(request: &DiagnosisRequest) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: ANALYZE_ENDPOINT.to_owned(),
        payload: Payload::Json(serde_json::json!({
            "alert_info": request.alert_info,
            "metrics_info": request.metrics_info,
            "log_info": request.log_info,
        })),
    }
}

/// Encode `key=value` pairs as an `application/x-www-form-urlencoded` body.
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Extract the user-facing message from a failed response body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| match parsed.error {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned())
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Fetch all categories in backend order.
///
/// # Errors
///
/// Returns the backend error message, or the fallback message.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    send_json(list_categories_request()).await
}

/// Create a category.
///
/// # Errors
///
/// Returns the backend error message, or the fallback message.
pub async fn create_category(category: &NewCategory) -> Result<(), String> {
    send(create_category_request(category)).await.map(|_| ())
}

/// Fetch knowledge entries in backend order, optionally filtered by category.
///
/// # Errors
///
/// Returns the backend error message, or the fallback message.
pub async fn fetch_knowledge(category_id: Option<i64>) -> Result<Vec<KnowledgeEntry>, String> {
    send_json(list_knowledge_request(category_id)).await
}

/// Create a knowledge entry.
///
/// # Errors
///
/// Returns the backend error message, or the fallback message.
pub async fn create_knowledge(knowledge: &NewKnowledge) -> Result<(), String> {
    send(create_knowledge_request(knowledge)).await.map(|_| ())
}

/// Submit observations for analysis.
///
/// # Errors
///
/// Returns the backend error message, or the fallback message.
pub async fn analyze(request: &DiagnosisRequest) -> Result<DiagnosisResult, String> {
    send_json(analyze_request(request)).await
}

// =============================================================================
// TRANSPORT
// =============================================================================

async fn send_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, String> {
    let url = request.url.clone();
    let body = send(request).await?;
    serde_json::from_str::<T>(&body).map_err(|e| {
        leptos::logging::warn!("unexpected response body from {url}: {e}");
        FALLBACK_ERROR_MESSAGE.to_owned()
    })
}

/// Issue the request and return the raw body of a 2xx response.
async fn send(request: ApiRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if request.needs_csrf() {
            if let Some(token) = crate::util::cookie::csrf_token(&crate::util::cookie::document_cookie()) {
                builder = builder.header(CSRF_HEADER_NAME, &token);
            }
        }

        let prepared = match request.payload {
            Payload::Empty => builder.build(),
            Payload::Json(value) => builder.json(&value),
            Payload::Form(body) => builder.header("Content-Type", FORM_CONTENT_TYPE).body(body),
        }
        .map_err(|e| {
            leptos::logging::warn!("request build failed for {}: {e}", request.url);
            FALLBACK_ERROR_MESSAGE.to_owned()
        })?;

        let resp = prepared.send().await.map_err(|e| {
            leptos::logging::warn!("request to {} failed: {e}", request.url);
            FALLBACK_ERROR_MESSAGE.to_owned()
        })?;
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            leptos::logging::warn!("{} returned status {}", request.url, resp.status());
            return Err(error_message(&body));
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

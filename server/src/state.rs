//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client and the backend base URL every `/api/*`
//! request is forwarded to.

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing `/`.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Redirects are passed to the browser rather than followed here.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialized.
    pub fn new(backend_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, backend_url: Arc::from(backend_url) })
    }
}

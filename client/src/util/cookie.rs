//! Cookie lookup for the CSRF token.
//!
//! The parser works on an explicit cookie string so it can be tested
//! without a browser; `document_cookie` is the only place that touches
//! `document.cookie`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Cookie set by the backend for anti-forgery checks.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Find `name` in a `document.cookie`-style string and return its decoded value.
///
/// Entries are `;`-separated with optional whitespace. The match is on the
/// exact name. A value that is not valid percent-encoding is returned as-is.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
        })
}

/// Current `document.cookie`, or an empty string outside the browser.
pub fn document_cookie() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// CSRF token from the given cookie string.
pub fn csrf_token(cookies: &str) -> Option<String> {
    read_cookie(cookies, CSRF_COOKIE_NAME)
}

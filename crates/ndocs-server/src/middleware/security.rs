//! Security headers.
//!
//! Rendered pages are plain markup with one inline `<style>` element. They
//! load nothing else, so the policy denies every other source.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy for rendered pages and JSON responses.
const CSP: &str = "default-src 'none'; \
                   style-src 'unsafe-inline'; \
                   base-uri 'none'; \
                   form-action 'none'; \
                   frame-ancestors 'none'";

/// Headers set on every response, overriding handler values.
pub(crate) const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
];

/// Layer that sets one static response header.
pub(crate) fn header_layer(
    name: &'static str,
    value: &'static str,
) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

use axum::{
    body::Body,
    http::{HeaderMap, Request, Response, StatusCode, header::{HeaderName, HeaderValue}},
    middleware::Next,
};

/// Content-Security-Policy for the rendered pages.
///
/// `wasm-unsafe-eval` is needed by the hydration bundle and `unsafe-inline`
/// styles by the theme `<style>` block in the document head.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     script-src 'self' 'wasm-unsafe-eval'; \
     style-src 'self' 'unsafe-inline'; \
     img-src 'self' data:; \
     font-src 'self' data:; \
     connect-src 'self'; \
     frame-ancestors 'none'; \
     base-uri 'self'; \
     form-action 'self'";

/// Security headers middleware
pub async fn security_headers(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;
    apply_security_headers(response.headers_mut());
    Ok(response)
}

fn apply_security_headers(headers: &mut HeaderMap) {
    let fixed = [
        ("x-frame-options", "DENY"),
        ("x-content-type-options", "nosniff"),
        ("referrer-policy", "strict-origin-when-cross-origin"),
        ("strict-transport-security", "max-age=31536000; includeSubDomains"),
        ("content-security-policy", CONTENT_SECURITY_POLICY),
        (
            "permissions-policy",
            "geolocation=(), microphone=(), camera=(), payment=(), usb=()",
        ),
    ];

    for (name, value) in fixed {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}

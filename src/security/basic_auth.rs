//! HTTP basic authentication gate.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::http::server::AppState;

const REALM: &str = "Basic realm=\"realm\"";

/// Decode `Authorization: Basic <base64(user:pass)>`.
pub fn parse_basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Equality that does not short-circuit on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// True when the request carries exactly the configured credentials.
pub fn is_authorized(headers: &HeaderMap, user: &str, password: &str) -> bool {
    match parse_basic_credentials(headers) {
        Some((u, p)) => u == user && constant_time_eq(p.as_bytes(), password.as_bytes()),
        None => false,
    }
}

pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let auth = &state.config.auth;
    if is_authorized(request.headers(), &auth.basic_auth_user, &auth.basic_auth_password) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Basic auth rejected");
    (StatusCode::UNAUTHORIZED, [(header::WWW_AUTHENTICATE, REALM)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_parse_valid_credentials() {
        // admin:secret
        let headers = headers_with("Basic YWRtaW46c2VjcmV0");
        assert_eq!(
            parse_basic_credentials(&headers),
            Some(("admin".to_string(), "secret".to_string()))
        );
        assert!(is_authorized(&headers, "admin", "secret"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("basic YWRtaW46c2VjcmV0");
        assert!(is_authorized(&headers, "admin", "secret"));
    }

    #[test]
    fn test_rejects_wrong_or_malformed() {
        assert!(!is_authorized(&headers_with("Basic YWRtaW46d3Jvbmc="), "admin", "secret"));
        assert!(!is_authorized(&headers_with("Bearer abc"), "admin", "secret"));
        assert!(!is_authorized(&headers_with("Basic !!!"), "admin", "secret"));
        assert!(!is_authorized(&HeaderMap::new(), "admin", "secret"));
    }

    #[test]
    fn test_password_may_contain_colon() {
        let encoded = STANDARD.encode("admin:se:cret");
        let headers = headers_with(&format!("Basic {encoded}"));
        assert!(is_authorized(&headers, "admin", "se:cret"));
    }
}

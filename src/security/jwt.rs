//! Bearer token (JWT) authentication gate.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::http::server::AppState;

/// Token claims. Any claim set is accepted; `exp` and `nbf` are checked when present.
pub type Claims = serde_json::Map<String, serde_json::Value>;

const TOKEN_COOKIE: &str = "jwt";

/// HS256 signer and verifier built from the configured key.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(sign_key: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_aud = false;
        validation.validate_nbf = true;

        Self {
            encoding: EncodingKey::from_secret(sign_key.as_bytes()),
            decoding: DecodingKey::from_secret(sign_key.as_bytes()),
            validation,
        }
    }

    /// Sign `claims` into a compact token.
    pub fn issue(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// A valid token with no claims, logged at startup for testing.
    pub fn example_token(&self) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(&Claims::new())
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

/// Token from `Authorization: Bearer <token>`, else from the `jwt` cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim().to_string())
        .filter(|token| !token.is_empty());

    bearer.or_else(|| {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == TOKEN_COOKIE)
            .map(|(_, value)| value.to_string())
    })
}

pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = token_from_headers(request.headers()) else {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    };

    match state.jwt.verify(&token) {
        Ok(_) => next.run(request).await,
        Err(e) => {
            tracing::debug!(error = %e, "JWT rejected");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

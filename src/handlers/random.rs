//! Random word, number and UUID generators.

use axum::{extract::Path, http::StatusCode, response::Response};
use rand::Rng;
use std::collections::HashMap;
use uuid::{Builder, Uuid};

use crate::handlers::parse_param;
use crate::http::response::text;
use crate::words::{random_words, MAX_WORD_COUNT};

/// Space-joined random words; `count` defaults to 1 and may not exceed
/// [`MAX_WORD_COUNT`].
pub fn words_response(count: Option<&str>) -> Response {
    match parse_param(count, 1).filter(|count| *count <= MAX_WORD_COUNT) {
        Some(count) => text(StatusCode::OK, random_words(count).join(" ")),
        None => text(StatusCode::BAD_REQUEST, "Invalid count value"),
    }
}

/// Uniform integer in `[0, max)`; `max` defaults to 1000 and must be positive.
pub fn number_response(max: Option<&str>) -> Response {
    match parse_param(max, 1000).filter(|max| *max > 0) {
        Some(max) => {
            let n = rand::thread_rng().gen_range(0..max);
            text(StatusCode::OK, n.to_string())
        }
        None => text(StatusCode::BAD_REQUEST, "Invalid max value"),
    }
}

/// Version 4 UUID whose random bytes come from `seed`, right-padded with
/// `'0'` to 16 bytes. Equal seeds always give equal UUIDs.
pub fn seeded_uuid(seed: &str) -> Uuid {
    let mut bytes = [b'0'; 16];
    let source = seed.as_bytes();
    let n = source.len().min(bytes.len());
    bytes[..n].copy_from_slice(&source[..n]);
    Builder::from_random_bytes(bytes).into_uuid()
}

pub fn uuid_response(input: Option<&str>) -> Response {
    let id = match input.filter(|s| !s.is_empty()) {
        Some(seed) => seeded_uuid(seed),
        None => Uuid::new_v4(),
    };
    text(StatusCode::OK, id.to_string())
}

pub async fn random_word(Path(params): Path<HashMap<String, String>>) -> Response {
    words_response(params.get("count").map(String::as_str))
}

pub async fn random_number(Path(params): Path<HashMap<String, String>>) -> Response {
    number_response(params.get("max").map(String::as_str))
}

pub async fn random_uuid(Path(params): Path<HashMap<String, String>>) -> Response {
    uuid_response(params.get("input").map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WORDS;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_words() {
        let body = body_of(words_response(Some("5"))).await;
        let tokens: Vec<_> = body.split(' ').collect();
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| WORDS.contains(t)));

        assert_eq!(body_of(words_response(Some("0"))).await, "");
        assert_eq!(body_of(words_response(Some("-4"))).await, "");
        assert_eq!(body_of(words_response(None)).await.split(' ').count(), 1);
    }

    #[tokio::test]
    async fn test_words_invalid_count() {
        let response = words_response(Some("many"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "Invalid count value");
    }

    #[tokio::test]
    async fn test_words_count_capped() {
        let response = words_response(Some(&MAX_WORD_COUNT.to_string()));
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        assert_eq!(bytes.split(|b| *b == b' ').count(), MAX_WORD_COUNT as usize);

        for count in [(MAX_WORD_COUNT + 1).to_string(), i64::MAX.to_string()] {
            let response = words_response(Some(&count));
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{count}");
            assert_eq!(body_of(response).await, "Invalid count value");
        }
    }

    #[tokio::test]
    async fn test_number_in_range() {
        for _ in 0..200 {
            let n: i64 = body_of(number_response(Some("10"))).await.parse().unwrap();
            assert!((0..10).contains(&n));
        }
        let n: i64 = body_of(number_response(None)).await.parse().unwrap();
        assert!((0..1000).contains(&n));
    }

    #[tokio::test]
    async fn test_number_invalid_max() {
        for max in ["ten", "0", "-1"] {
            let response = number_response(Some(max));
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{max}");
            assert_eq!(body_of(response).await, "Invalid max value");
        }
    }

    #[test]
    fn test_seeded_uuid_is_deterministic() {
        assert_eq!(seeded_uuid("hello"), seeded_uuid("hello"));
        assert_ne!(seeded_uuid("hello"), seeded_uuid("world"));
        assert_eq!(
            seeded_uuid("test").to_string(),
            "74657374-3030-4030-b030-303030303030"
        );
        assert_eq!(seeded_uuid("test").get_version_num(), 4);
    }

    #[test]
    fn test_long_seed_uses_first_sixteen_bytes() {
        assert_eq!(
            seeded_uuid("abcdefghijklmnop-extra"),
            seeded_uuid("abcdefghijklmnop")
        );
    }

    #[tokio::test]
    async fn test_random_uuid_parses_and_varies() {
        let a = body_of(uuid_response(None)).await;
        let b = body_of(uuid_response(None)).await;
        assert_eq!(Uuid::parse_str(&a).unwrap().get_version_num(), 4);
        assert_ne!(a, b);
    }
}

//! Request snapshots.
//!
//! # Responsibilities
//! - Capture method, path, peer address, headers, query and optionally the
//!   body of an inbound request into a serializable record
//! - Hand the request back with its body restored so later stages can
//!   read it again
//!
//! # Design Decisions
//! - A body that cannot be read is an error, never silently emptied; an
//!   oversized body maps to 413 like the body limit layer
//! - Multi-valued headers and query parameters are joined with `,`
//! - Header names use canonical MIME casing (`X-Test`, `Content-Type`)
//! - `Host` is part of the request line, not of `headers`

use axum::{
    body::{self, Body},
    extract::ConnectInfo,
    http::{header, request::Parts, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{Local, SecondsFormat};
use http_body_util::LengthLimitError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::net::SocketAddr;
use thiserror::Error;

use crate::http::response::text;

/// Failure to buffer the request body for a snapshot.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    Read(axum::Error),
}

impl IntoResponse for CaptureError {
    fn into_response(self) -> Response {
        match self {
            CaptureError::TooLarge { .. } => {
                text(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded")
            }
            CaptureError::Read(_) => text(StatusCode::BAD_REQUEST, "Failed to read request body"),
        }
    }
}

fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Immutable view of one HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestSnapshot {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_addr: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
}

impl RequestSnapshot {
    /// Snapshot `request`, reading at most `body_limit` bytes of body when
    /// `capture_body` is set. Returns the request with an intact body.
    pub async fn capture(
        request: Request<Body>,
        capture_body: bool,
        body_limit: usize,
    ) -> Result<(Self, Request<Body>), CaptureError> {
        let (parts, body) = request.into_parts();
        if !capture_body {
            let snapshot = Self::from_parts(&parts, String::new());
            return Ok((snapshot, Request::from_parts(parts, body)));
        }

        let bytes = body::to_bytes(body, body_limit).await.map_err(|e| {
            if exceeds_limit(&e) {
                CaptureError::TooLarge { limit: body_limit }
            } else {
                CaptureError::Read(e)
            }
        })?;

        let snapshot = Self::from_parts(&parts, String::from_utf8_lossy(&bytes).into_owned());
        Ok((snapshot, Request::from_parts(parts, Body::from(bytes))))
    }

    /// Build a snapshot from request head parts and an already read body.
    pub fn from_parts(parts: &Parts, body: String) -> Self {
        let remote_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_default();

        Self {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            remote_addr,
            headers: flatten_headers(&parts.headers),
            query: flatten_query(parts.uri.query()),
            body,
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Two-space indented JSON.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Canonical MIME header casing: first letter and every letter after a
/// hyphen upper case, the rest lower case.
pub fn canonical_header_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper = c == '-';
    }
    out
}

fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter(|name| **name != header::HOST)
        .map(|name| {
            let joined = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            (canonical_header_name(name.as_str()), joined)
        })
        .collect()
}

fn flatten_query(query: Option<&str>) -> BTreeMap<String, String> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            grouped.entry(key.into_owned()).or_default().push(value.into_owned());
        }
    }
    grouped
        .into_iter()
        .map(|(key, values)| (key, values.join(",")))
        .collect()
}

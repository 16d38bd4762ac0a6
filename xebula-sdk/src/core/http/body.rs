//! Request and response payloads
//!
//! Bodies are encoded before the request is built so that encoding failures
//! surface before anything touches the network. Successful responses are
//! decoded with the response cookies merged into the payload.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::shared::constants::{COOKIES_KEY, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
use crate::shared::error::XebulaError;
use crate::shared::types::{ResponseCookie, SameSite};
use crate::shared::utils::timestamp_to_utc;

/// Outgoing request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// JSON-encoded value
    Json(Vec<u8>),
    /// Bytes passed through untouched
    Raw(Vec<u8>),
}

impl RequestBody {
    /// Serialize a value as JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, XebulaError> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }

    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Raw(bytes.into())
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => CONTENT_TYPE_JSON,
            RequestBody::Raw(_) => CONTENT_TYPE_TEXT,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RequestBody::Json(bytes) | RequestBody::Raw(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RequestBody::Json(bytes) | RequestBody::Raw(bytes) => bytes,
        }
    }
}

/// A response that came back with a 200 status
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub cookies: Vec<ResponseCookie>,
}

impl HttpResponse {
    /// Decode the body into `O` after merging the cookies under [`COOKIES_KEY`].
    pub fn decode<O: DeserializeOwned>(self) -> Result<O, XebulaError> {
        let value = inject_cookies(&self.body, &self.cookies)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Merge cookies into a JSON document.
///
/// Only top-level objects receive the cookies. An empty body becomes an
/// object holding nothing but the cookies; any other JSON value is returned
/// unchanged.
pub fn inject_cookies(body: &[u8], cookies: &[ResponseCookie]) -> Result<Value, XebulaError> {
    let cookies = serde_json::to_value(cookies)?;

    if body.iter().all(u8::is_ascii_whitespace) {
        let mut map = Map::new();
        map.insert(COOKIES_KEY.to_string(), cookies);
        return Ok(Value::Object(map));
    }

    let mut value: Value = serde_json::from_slice(body)?;
    if let Value::Object(map) = &mut value {
        map.insert(COOKIES_KEY.to_string(), cookies);
    }
    Ok(value)
}

/// Parse one `Set-Cookie` header line.
///
/// The line is kept whole in `raw` and the expires attribute text in
/// `raw_expires`. Attributes that are not understood end up in `unparsed`.
/// Lines without a valid name/value pair yield `None`.
pub fn parse_set_cookie(line: &str) -> Option<ResponseCookie> {
    let parsed = cookie::Cookie::parse(line).ok()?;

    let mut raw_expires = String::new();
    let mut same_site = SameSite::Unset;
    let mut unparsed = Vec::new();
    for attr in line.split(';').skip(1) {
        let attr = attr.trim();
        if attr.is_empty() {
            continue;
        }
        let (key, value) = match attr.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (attr, ""),
        };
        match key.to_ascii_lowercase().as_str() {
            "expires" => raw_expires = value.to_string(),
            "samesite" => {
                same_site = match value.to_ascii_lowercase().as_str() {
                    "lax" => SameSite::Lax,
                    "strict" => SameSite::Strict,
                    "none" => SameSite::None,
                    _ => SameSite::Default,
                }
            }
            "path" | "domain" | "max-age" | "secure" | "httponly" | "partitioned" => {}
            _ => unparsed.push(attr.to_string()),
        }
    }

    Some(ResponseCookie {
        name: parsed.name().to_string(),
        value: parsed.value().to_string(),
        path: parsed.path().unwrap_or_default().to_string(),
        domain: parsed.domain().unwrap_or_default().to_string(),
        expires: parsed
            .expires_datetime()
            .and_then(|at| timestamp_to_utc(at.unix_timestamp())),
        raw_expires,
        // Zero and negative ages both mean "delete now"
        max_age: parsed
            .max_age()
            .map(|age| age.whole_seconds())
            .map(|secs| if secs <= 0 { -1 } else { secs })
            .unwrap_or_default(),
        secure: parsed.secure().unwrap_or(false),
        http_only: parsed.http_only().unwrap_or(false),
        same_site,
        raw: line.to_string(),
        unparsed,
    })
}

//! Error handling for the Xebula SDK
//!
//! This module defines the error types used throughout the SDK.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::shared::constants::{INVALID_URL_ERROR, NOT_IMPLEMENTED_ERROR};

/// Error returned when an HTTP exchange does not end in a 200 response.
///
/// The status is kept out of the JSON form; it is carried by the response itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpError {
    #[serde(skip)]
    pub status: u16,
    #[serde(rename = "error_description")]
    pub description: String,
    pub method: String,
    pub url: String,
}

impl HttpError {
    pub fn new(
        status: u16,
        description: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            status,
            description: description.into(),
            method: method.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} returned [{}]: {}",
            self.method, self.url, self.status, self.description
        )
    }
}

impl std::error::Error for HttpError {}

/// SDK error type
#[derive(Error, Debug, Clone)]
pub enum XebulaError {
    #[error("invalid API url")]
    InvalidUrl { details: String },

    #[error("method not implemented")]
    NotImplemented(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Generic(String),
}

impl XebulaError {
    /// Create an invalid URL error
    pub fn invalid_url(details: impl Into<String>) -> Self {
        Self::InvalidUrl { details: details.into() }
    }

    pub fn not_implemented(what: &str) -> Self {
        Self::NotImplemented(what.to_string())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Build an error from one of the kind codes in [`crate::shared::constants`].
    /// Unknown kinds fall back to a message-only error carrying `details`.
    pub fn from_kind(kind: &str, details: Option<&str>) -> Self {
        match kind {
            INVALID_URL_ERROR => Self::invalid_url(details.unwrap_or_default()),
            NOT_IMPLEMENTED_ERROR => Self::not_implemented(details.unwrap_or_default()),
            _ => Self::Generic(details.unwrap_or_default().to_string()),
        }
    }

    /// Kind code for the named error kinds
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::InvalidUrl { .. } => Some(INVALID_URL_ERROR),
            Self::NotImplemented(_) => Some(NOT_IMPLEMENTED_ERROR),
            _ => None,
        }
    }

    /// The structured HTTP error, if this is one
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for XebulaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

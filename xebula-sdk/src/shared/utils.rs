//! Utility functions for the Xebula SDK
//!
//! This module contains common utility functions used throughout the SDK.

use crate::shared::error::XebulaError;
use std::env;

/// Ensure an endpoint starts with a single leading slash.
///
/// Empty and root endpoints are rejected; they never address an API resource.
pub fn normalize_endpoint(endpoint: &str) -> Result<String, XebulaError> {
    if endpoint.is_empty() || endpoint == "/" {
        return Err(XebulaError::invalid_url(format!("endpoint {:?} is not addressable", endpoint)));
    }

    if endpoint.starts_with('/') {
        Ok(endpoint.to_string())
    } else {
        Ok(format!("/{}", endpoint))
    }
}

/// Convert seconds since the Unix epoch into a UTC timestamp
pub fn timestamp_to_utc(secs: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(secs, 0)
}

/// Read an environment variable, treating empty values as unset
pub fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a numeric environment variable
pub fn env_u64(key: &str) -> Result<Option<u64>, XebulaError> {
    match env_var(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| XebulaError::config(format!("{} must be a number: {}", key, e))),
        None => Ok(None),
    }
}

/// Serializes tests that mutate the `XEBULA_*` environment
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

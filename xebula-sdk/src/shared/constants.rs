//! Constants for the Xebula SDK
//!
//! This module contains all constants used throughout the SDK.

// API constants
pub const DEFAULT_BASE_URL: &str = "https://api-dev.xebula.io";
pub const DEFAULT_TIMEOUT: u64 = 10000; // milliseconds
pub const API_VERSION: &str = "v1";

// Key under which response cookies are merged into decoded JSON payloads
pub const COOKIES_KEY: &str = "$cookies$";

// Error kind codes
pub const INVALID_URL_ERROR: &str = "invalid_url_error";
pub const NOT_IMPLEMENTED_ERROR: &str = "not_implemented_error";

// Transport constants
pub const CONNECT_TIMEOUT: u64 = 30000; // milliseconds
pub const TCP_KEEPALIVE: u64 = 30000; // milliseconds
pub const HTTP_STATUS_OK: u16 = 200;
pub const TRANSPORT_FAILURE_STATUS: u16 = 418; // no response was received

// Content types
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

// Environment variables
pub const ENV_BASE_URL: &str = "XEBULA_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "XEBULA_TIMEOUT_MS";
pub const ENV_USERNAME: &str = "XEBULA_USERNAME";
pub const ENV_PASSWORD: &str = "XEBULA_PASSWORD";

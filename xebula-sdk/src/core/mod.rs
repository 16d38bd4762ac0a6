//! Core SDK functionality
//!
//! This module contains the HTTP machinery every API call goes through.

pub mod http;

pub use http::{HttpClient, HttpResponse, RequestBody};

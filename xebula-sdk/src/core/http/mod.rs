//! Generic JSON HTTP client
//!
//! Every API call goes through [`HttpClient`]: the verb is dispatched, the
//! body is marshaled, and the response is either decoded (with cookies
//! injected) or turned into a structured [`HttpError`].

pub mod body;

#[cfg(test)]
mod tests;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, SET_COOKIE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::domain::entities::config::Config;
use crate::shared::constants::{
    CONNECT_TIMEOUT, DEFAULT_TIMEOUT, HTTP_STATUS_OK, TCP_KEEPALIVE, TRANSPORT_FAILURE_STATUS,
};
use crate::shared::error::{HttpError, XebulaError};
use crate::shared::types::{BasicAuth, Header, HttpMethod, ResponseCookie};

pub use body::{inject_cookies, parse_set_cookie, HttpResponse, RequestBody};

/// HTTP client for the Xebula API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    basic_auth: BasicAuth,
}

impl HttpClient {
    /// Create a client with the default timeouts and no credentials
    pub fn new() -> Result<Self, XebulaError> {
        Self::with_timeout(Duration::from_millis(DEFAULT_TIMEOUT))
    }

    /// Create a client honouring the timeout and credentials of `config`
    pub fn from_config(config: &Config) -> Result<Self, XebulaError> {
        let mut client = Self::with_timeout(Duration::from_millis(config.timeout_ms))?;
        if let Some(auth) = &config.basic_auth {
            client.set_basic_auth(auth.username.clone(), auth.password.clone());
        }
        Ok(client)
    }

    /// `timeout` bounds each read from the connection, including the wait for
    /// response headers, rather than the whole exchange. Connecting has its
    /// own 30 s budget, and a slow body that keeps producing data is not cut off.
    fn with_timeout(timeout: Duration) -> Result<Self, XebulaError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(CONNECT_TIMEOUT))
            .tcp_keepalive(Duration::from_millis(TCP_KEEPALIVE))
            .read_timeout(timeout)
            .build()
            .map_err(|e| XebulaError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            basic_auth: BasicAuth::default(),
        })
    }

    pub fn set_basic_auth(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.basic_auth = BasicAuth::new(username, password);
    }

    pub fn basic_auth(&self) -> &BasicAuth {
        &self.basic_auth
    }

    pub async fn get<O: DeserializeOwned>(&self, url: &str, headers: &[Header]) -> Result<O, XebulaError> {
        self.send(url, HttpMethod::Get, None, headers).await?.decode()
    }

    pub async fn post<O: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<O, XebulaError> {
        self.send(url, HttpMethod::Post, body, headers).await?.decode()
    }

    pub async fn put<O: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<O, XebulaError> {
        self.send(url, HttpMethod::Put, body, headers).await?.decode()
    }

    pub async fn patch<O: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<O, XebulaError> {
        self.send(url, HttpMethod::Patch, body, headers).await?.decode()
    }

    pub async fn delete<O: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<O, XebulaError> {
        self.send(url, HttpMethod::Delete, body, headers).await?.decode()
    }

    /// Dispatch a call by verb and decode the JSON response into `O`.
    /// GET requests never carry a body.
    pub async fn execute<O: DeserializeOwned>(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<O, XebulaError> {
        match method {
            HttpMethod::Get => self.get(url, headers).await,
            HttpMethod::Post => self.post(url, body, headers).await,
            HttpMethod::Put => self.put(url, body, headers).await,
            HttpMethod::Patch => self.patch(url, body, headers).await,
            HttpMethod::Delete => self.delete(url, body, headers).await,
        }
    }

    /// Dispatch a call and return the response body untouched
    pub async fn execute_raw(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<Vec<u8>, XebulaError> {
        Ok(self.send(url, method, body, headers).await?.body)
    }

    /// Dispatch a call for its status only; the body is discarded
    pub async fn execute_empty(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<(), XebulaError> {
        self.send(url, method, body, headers).await.map(|_| ())
    }

    /// Perform one round-trip. Anything other than a 200 becomes an [`HttpError`].
    async fn send(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<HttpResponse, XebulaError> {
        let failure = |status: u16, description: String| {
            XebulaError::Http(HttpError::new(status, description, method.as_str(), url))
        };

        let body = if method == HttpMethod::Get { None } else { body };
        let request = self
            .build_request(url, method, body, headers)
            .map_err(|description| failure(TRANSPORT_FAILURE_STATUS, description))?;

        log::debug!("{} {}", method, url);
        let response = request.send().await.map_err(|e| {
            let status = e.status().map(|s| s.as_u16()).unwrap_or(TRANSPORT_FAILURE_STATUS);
            log::warn!("{} {} failed: {}", method, url, e);
            failure(status, e.to_string())
        })?;

        let status = response.status().as_u16();
        let cookies: Vec<ResponseCookie> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|line| line.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();
        // A failed body read after the status line is not an HttpError
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                log::warn!("{} {} body read failed: {}", method, url, e);
                XebulaError::Generic(format!("failed to read response body: {}", e))
            })?
            .to_vec();

        if status != HTTP_STATUS_OK {
            log::warn!("{} {} returned [{}]", method, url, status);
            return Err(failure(status, String::from_utf8_lossy(&body).into_owned()));
        }

        Ok(HttpResponse { status, body, cookies })
    }

    fn build_request(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<RequestBuilder, String> {
        let url = Url::parse(url).map_err(|e| format!("invalid url {}: {}", url, e))?;

        let mut header_map = HeaderMap::new();
        for header in headers {
            let name = HeaderName::from_bytes(header.key.as_bytes())
                .map_err(|e| format!("invalid header name {}: {}", header.key, e))?;
            let value = HeaderValue::from_str(&header.value)
                .map_err(|e| format!("invalid value for header {}: {}", header.key, e))?;
            header_map.append(name, value);
        }

        // Body headers replace anything the caller supplied for the same names
        if let Some(body) = &body {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static(body.content_type()));
            if let RequestBody::Json(bytes) = body {
                header_map.insert(CONTENT_LENGTH, HeaderValue::from(bytes.len()));
            }
        }

        let mut request = self.client.request(method.into(), url).headers(header_map);

        if self.basic_auth.is_set() {
            request = request.basic_auth(&self.basic_auth.username, Some(&self.basic_auth.password));
        }

        if let Some(body) = body {
            request = request.body(body.into_bytes());
        }

        Ok(request)
    }
}

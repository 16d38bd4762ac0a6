//! API entity: builds versioned URLs and issues calls against them

use serde::de::DeserializeOwned;

use crate::core::http::{HttpClient, RequestBody};
use crate::domain::entities::config::Config;
use crate::shared::constants::API_VERSION;
use crate::shared::error::XebulaError;
use crate::shared::types::{Header, HttpMethod};
use crate::shared::utils::normalize_endpoint;

#[derive(Debug, Clone)]
pub struct Entity {
    pub config: Config,
    client: HttpClient,
}

impl Entity {
    pub fn new(config: Config) -> Result<Self, XebulaError> {
        let client = HttpClient::from_config(&config)?;
        Ok(Self { config, client })
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Build `{base_url}/v1{endpoint}`.
    ///
    /// A missing leading slash is added; empty and root endpoints are rejected
    /// with [`XebulaError::InvalidUrl`].
    pub fn build_url(&self, endpoint: &str) -> Result<String, XebulaError> {
        let endpoint = normalize_endpoint(endpoint)?;
        Ok(format!("{}/{}{}", self.config.base_url, API_VERSION, endpoint))
    }

    /// Call an endpoint and decode the JSON response into `O`
    pub async fn api_call<O: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<O, XebulaError> {
        let url = self.build_url(endpoint)?;
        let headers = self.merge_headers(headers);
        self.client.execute(&url, method, body, &headers).await
    }

    /// Call an endpoint and return the raw response body
    pub async fn api_call_raw(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<Vec<u8>, XebulaError> {
        let url = self.build_url(endpoint)?;
        let headers = self.merge_headers(headers);
        self.client.execute_raw(&url, method, body, &headers).await
    }

    /// Call an endpoint for its status only
    pub async fn api_call_empty(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<RequestBody>,
        headers: &[Header],
    ) -> Result<(), XebulaError> {
        let url = self.build_url(endpoint)?;
        let headers = self.merge_headers(headers);
        self.client.execute_empty(&url, method, body, &headers).await
    }

    fn merge_headers(&self, headers: &[Header]) -> Vec<Header> {
        self.config
            .default_headers
            .iter()
            .chain(headers.iter())
            .cloned()
            .collect()
    }
}

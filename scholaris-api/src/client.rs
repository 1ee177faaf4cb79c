//! HTTP client for the directory service.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::ApiError;
use crate::types::ApiResponse;

/// JSON API client for the directory service
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        debug!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self { client, base_url }
    }

    /// Build a full URL from a versioned route path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request and unwrap the response envelope
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => {
                let envelope: ApiResponse<T> = response.json().await?;
                if !envelope.is_success() {
                    let message = envelope
                        .error
                        .or(envelope.message)
                        .unwrap_or_else(|| "Unknown server error".to_string());
                    return Err(ApiError::Server(message));
                }
                match envelope.data {
                    Some(data) => Ok(data),
                    None => Err(ApiError::EmptyResponse),
                }
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("GET request to: {url}");

        self.execute_request(self.client.get(&url)).await
    }

    /// POST request
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("POST request to: {url}");

        self.execute_request(self.client.post(&url).json(body)).await
    }

    /// PUT request
    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("PUT request to: {url}");

        self.execute_request(self.client.put(&url).json(body)).await
    }

    /// DELETE request
    pub async fn delete<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("DELETE request to: {url}");

        self.execute_request(self.client.delete(&url).query(query))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_route() {
        let client = ApiClient::new("http://localhost:5194/".to_string());
        assert_eq!(
            client.build_url("/api/v1/directory/users"),
            "http://localhost:5194/api/v1/directory/users"
        );
    }
}

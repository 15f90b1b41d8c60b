//! HTTP client for the remote directory API

use directory_core::config::RemoteApiConfig;
use directory_core::{Department, Employee, EmployeeId, EmployeePage};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors raised while talking to the remote API
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (connect, timeout, TLS)
    #[error("Failed to fetch {resource}: {source}")]
    Http {
        /// What was being fetched
        resource: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Remote answered with a non-success status
    #[error("API returned error for {resource}: {status}")]
    Status {
        /// What was being fetched
        resource: &'static str,
        /// Status code received
        status: StatusCode,
    },

    /// Body did not match the expected shape
    #[error("Failed to parse {resource}: {source}")]
    Decode {
        /// What was being fetched
        resource: &'static str,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },

    /// Client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Read-only client for the employee and category endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    fetch_limit: Option<u32>,
}

impl ApiClient {
    /// Create a client from the remote API settings
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &RemoteApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fetch_limit: config.fetch_limit,
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the employee collection
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the status is not a
    /// success, or the body cannot be parsed.
    pub async fn get_employees(&self) -> Result<EmployeePage, FetchError> {
        let mut url = format!("{}/users", self.base_url);
        if let Some(limit) = self.fetch_limit {
            url.push_str(&format!("?limit={limit}"));
        }

        self.get_json("employees", &url).await
    }

    /// Fetch the department catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the status is not a
    /// success, or the body cannot be parsed.
    pub async fn get_departments(&self) -> Result<Vec<Department>, FetchError> {
        let url = format!("{}/products/categories", self.base_url);
        self.get_json("departments", &url).await
    }

    /// Fetch one employee; `Ok(None)` when the remote reports it missing
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the status is neither a
    /// success nor 404, or the body cannot be parsed.
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, FetchError> {
        const RESOURCE: &str = "employee";
        let url = format!("{}/users/{id}", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Http { resource: RESOURCE, source })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                resource: RESOURCE,
                status: response.status(),
            });
        }

        let employee = response
            .json::<Employee>()
            .await
            .map_err(|source| FetchError::Decode { resource: RESOURCE, source })?;
        Ok(Some(employee))
    }

    async fn get_json<T>(&self, resource: &'static str, url: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http { resource, source })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                resource,
                status: response.status(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { resource, source })
    }
}

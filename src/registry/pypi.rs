//! PyPI JSON API client for fetching released package versions

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::PackageReleases;
use crate::registry::{RegistryError, ReleaseSource};

pub const DEFAULT_PYPI_URL: &str = "https://pypi.org";

/// PyPI release-index client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PYPI_URL.to_string())
    }
}

impl PypiRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    releases: HashMap<String, Vec<PypiFile>>,
}

/// File information; only the release keys matter, but the entries must
/// deserialize
#[derive(Debug, Deserialize)]
struct PypiFile {}

#[async_trait]
impl ReleaseSource for PypiRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<PackageReleases, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI releases: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                response.status()
            )));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!(
            "Found {} released versions for package {}",
            pypi_response.releases.len(),
            package_name
        );

        PackageReleases::new(package_name, pypi_response.releases.into_keys())
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))
    }
}

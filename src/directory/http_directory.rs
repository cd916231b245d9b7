use lazy_static::lazy_static;
use log::{debug, warn};
use reqwest::blocking::Client;

use super::{config::DirectoryConfig, parse_banks, Bank, BankDirectory};
use crate::error::DirectoryError;
use crate::observability::labels::Labels;
use crate::observability::metrics::DirectoryMetrics;

lazy_static! {
    static ref DIRECTORY_CLIENT: Client = Client::new();
}

const ENDPOINT: &str = "endpoint";

/// Bank directory served as a JSON document over HTTP
pub struct HttpBankDirectory {
    config: DirectoryConfig,
    metrics: DirectoryMetrics,
}

impl HttpBankDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        let labels = Labels::new(&[(ENDPOINT, config.endpoint.clone())]);
        HttpBankDirectory {
            metrics: DirectoryMetrics::new(&labels),
            config,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Downloads and parses the directory, surfacing every failure
    pub fn fetch_banks(&self) -> Result<Vec<Bank>, DirectoryError> {
        let result = self.fetch_body().and_then(|body| parse_banks(&body));
        match &result {
            Ok(banks) => {
                self.metrics.fetch_success.increment(1);
                self.metrics.banks_loaded.increment(banks.len() as u64);
                debug!(
                    "Loaded {} banks from {}",
                    banks.len(),
                    self.config.endpoint
                );
            }
            Err(DirectoryError::FetchFailed(_)) => self.metrics.fetch_failed.increment(1),
            Err(DirectoryError::ParseFailed(_)) => self.metrics.parse_failed.increment(1),
        }
        result
    }

    fn fetch_body(&self) -> Result<String, DirectoryError> {
        let mut request_builder = DIRECTORY_CLIENT
            .get(&self.config.endpoint)
            .timeout(self.config.options.timeout);
        for header in &self.config.request_headers {
            request_builder = request_builder.header(&header.key, &header.value);
        }

        let response = request_builder
            .send()
            .map_err(|err| DirectoryError::FetchFailed(format!("Error making HTTP request: {}", err)))?;

        if !response.status().is_success() {
            return Err(DirectoryError::FetchFailed(format!(
                "Unexpected HTTP status code {}",
                response.status().as_u16()
            )));
        }

        response
            .text()
            .map_err(|err| DirectoryError::FetchFailed(format!("Error reading HTTP body: {}", err)))
    }
}

impl BankDirectory for HttpBankDirectory {
    /// Degrades to an empty list when the directory is unavailable. Use
    /// [`HttpBankDirectory::fetch_banks`] to tell both situations apart.
    fn list_banks(&self) -> Vec<Bank> {
        match self.fetch_banks() {
            Ok(banks) => banks,
            Err(err) => {
                warn!("{}, no bank will be listed", err);
                vec![]
            }
        }
    }
}

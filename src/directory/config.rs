use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HTTPS_TIMEOUT_SEC: u64 = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RequestHeader {
    pub key: String,
    pub value: String,
}

impl RequestHeader {
    pub fn new(key: &str, value: &str) -> Self {
        RequestHeader {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DirectoryOption {
    pub timeout: Duration,
}

impl Default for DirectoryOption {
    fn default() -> Self {
        DirectoryOption {
            timeout: Duration::from_secs(DEFAULT_HTTPS_TIMEOUT_SEC),
        }
    }
}

/// Where and how to download the bank directory
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DirectoryConfig {
    pub endpoint: String,
    pub request_headers: Vec<RequestHeader>,
    pub options: DirectoryOption,
}

impl DirectoryConfig {
    pub fn new(endpoint: &str) -> Self {
        DirectoryConfigBuilder::new(endpoint.to_string()).build()
    }
}

pub struct DirectoryConfigBuilder {
    endpoint: String,
    request_headers: Vec<RequestHeader>,
    options: DirectoryOption,
}

impl DirectoryConfigBuilder {
    pub fn new(endpoint: String) -> Self {
        DirectoryConfigBuilder {
            endpoint,
            request_headers: vec![RequestHeader::new("Accept", "application/json")],
            options: DirectoryOption::default(),
        }
    }
    pub fn set_request_headers(&mut self, request_headers: Vec<RequestHeader>) -> &mut Self {
        self.request_headers = request_headers;
        self
    }
    pub fn add_request_header(&mut self, key: &str, value: &str) -> &mut Self {
        self.request_headers.push(RequestHeader::new(key, value));
        self
    }
    pub fn set_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.options.timeout = timeout;
        self
    }
    pub fn build(&self) -> DirectoryConfig {
        DirectoryConfig {
            endpoint: self.endpoint.clone(),
            request_headers: self.request_headers.clone(),
            options: self.options.clone(),
        }
    }
}

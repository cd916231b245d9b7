pub mod config;
mod http_directory;

pub use crate::directory::config::{
    DirectoryConfig, DirectoryConfigBuilder, DirectoryOption, RequestHeader,
    DEFAULT_HTTPS_TIMEOUT_SEC,
};
pub use crate::directory::http_directory::HttpBankDirectory;

use crate::bank_code::{BankCode, BankCodeKind};
use crate::checksum::validate;
use crate::error::{DirectoryError, NubanError};
use serde::{Deserialize, Serialize};

/// A financial institution as listed in a bank directory. Either code may be
/// missing: older banks only have a short code, newer institutions only a long one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub name: String,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub long_code: Option<String>,
}

impl Bank {
    pub fn new(name: &str, short_code: Option<&str>, long_code: Option<&str>) -> Self {
        Bank {
            name: name.to_string(),
            short_code: short_code.map(str::to_string),
            long_code: long_code.map(str::to_string),
        }
    }

    /// The codes present on this record, tagged with the field they come from
    pub fn codes(&self) -> impl Iterator<Item = (BankCodeKind, &str)> {
        [
            (BankCodeKind::Short, self.short_code.as_deref()),
            (BankCodeKind::Long, self.long_code.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, code)| code.map(|code| (kind, code)))
    }

    /// Returns whether `account_number` is valid for the short or the long code.
    /// Each code is checked on its own; a code that cannot be parsed never matches.
    pub fn matches(&self, account_number: &str) -> bool {
        self.codes()
            .any(|(_, code)| validate(account_number, code).unwrap_or(false))
    }

    /// Parsed codes of this record. Malformed codes are returned as errors so the
    /// caller can decide to report or skip them.
    pub fn parsed_codes(&self) -> impl Iterator<Item = (BankCodeKind, Result<BankCode, NubanError>)> + '_ {
        self.codes().map(|(kind, code)| (kind, BankCode::parse(code)))
    }
}

/// Source of the known banks
pub trait BankDirectory {
    /// Lists every known bank. An unavailable directory yields an empty list.
    fn list_banks(&self) -> Vec<Bank>;
}

/// A directory held in memory, usually loaded once from a JSON document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticBankDirectory {
    banks: Vec<Bank>,
}

impl StaticBankDirectory {
    pub fn new(banks: Vec<Bank>) -> Self {
        StaticBankDirectory { banks }
    }

    pub fn from_json(input: &str) -> Result<Self, DirectoryError> {
        Ok(StaticBankDirectory::new(parse_banks(input)?))
    }
}

impl BankDirectory for StaticBankDirectory {
    fn list_banks(&self) -> Vec<Bank> {
        self.banks.clone()
    }
}

/// Parses a JSON array of bank records. Unknown fields are ignored.
pub fn parse_banks(input: &str) -> Result<Vec<Bank>, DirectoryError> {
    serde_json::from_str(input).map_err(|err| DirectoryError::ParseFailed(err.to_string()))
}

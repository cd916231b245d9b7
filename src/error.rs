use thiserror::Error;

use crate::checksum::SERIAL_NUMBER_LENGTH;

impl From<NubanError> for i32 {
    fn from(value: NubanError) -> i32 {
        match value {
            NubanError::InvalidBankCode => 2,
            NubanError::SerialNumberTooLong => 3,
            NubanError::InvalidInput => 4,
        }
    }
}

/// Errors raised by the check digit routines. All of them are caller bugs and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NubanError {
    #[error("Bank codes must be made of exactly 3 or 5 digits")]
    InvalidBankCode,

    #[error("Serial numbers cannot be longer than {} digits", SERIAL_NUMBER_LENGTH)]
    SerialNumberTooLong,

    #[error("Serial numbers must be a non-empty string of ASCII digits")]
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The request could not be sent or the server answered with a non-success status
    #[error("Unable to fetch the bank directory: {0}")]
    FetchFailed(String),

    /// The response body is not a list of bank records
    #[error("Unable to parse the bank directory: {0}")]
    ParseFailed(String),
}

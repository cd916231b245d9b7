// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank_code;
mod checksum;
mod directory;
mod error;
mod inference;
mod observability;

// This is the public API of the NUBAN library
pub use bank_code::{
    BankCode, BankCodeKind, LONG_BANK_CODE_LENGTH, NORMALIZED_BANK_CODE_LENGTH,
    SHORT_BANK_CODE_LENGTH,
};
pub use checksum::{
    check_digit, generate, validate, NubanChecksum, Validator, ACCOUNT_NUMBER_LENGTH,
    CIPHER_LENGTH, SEED, SERIAL_NUMBER_LENGTH,
};
pub use directory::{
    parse_banks, Bank, BankDirectory, DirectoryConfig, DirectoryConfigBuilder, DirectoryOption,
    HttpBankDirectory, RequestHeader, StaticBankDirectory, DEFAULT_HTTPS_TIMEOUT_SEC,
};
pub use error::{DirectoryError, NubanError};
pub use inference::{infer_banks, BankInferrer};
pub use observability::labels::Labels;

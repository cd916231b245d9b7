mod nuban_checksum;

pub(crate) use crate::checksum::nuban_checksum::is_valid_account_number;
pub use crate::checksum::nuban_checksum::{check_digit, generate, validate, NubanChecksum};

/// Weights applied position by position to the 15 digits of the cipher
pub const SEED: &[u8; CIPHER_LENGTH] = b"373373373373373";
pub const SERIAL_NUMBER_LENGTH: usize = 9;
pub const ACCOUNT_NUMBER_LENGTH: usize = SERIAL_NUMBER_LENGTH + 1;
pub const CIPHER_LENGTH: usize =
    crate::bank_code::NORMALIZED_BANK_CODE_LENGTH + SERIAL_NUMBER_LENGTH;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Drop the separators commonly used when an account number is written down.
/// Any other character is kept so it fails the digit check later on.
fn filter_separators(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

#[inline]
fn is_digit_string(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

/// Value of an ASCII digit. Callers must have checked the byte with `is_ascii_digit`.
#[inline]
fn digit_value(byte: u8) -> u32 {
    (byte - b'0') as u32
}

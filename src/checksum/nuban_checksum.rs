use crate::bank_code::BankCode;
use crate::checksum::{
    digit_value, filter_separators, is_digit_string, Validator, ACCOUNT_NUMBER_LENGTH, SEED,
    SERIAL_NUMBER_LENGTH,
};
use crate::error::NubanError;

/// Checks account numbers against a single bank code. Spaces and dashes are
/// ignored so "123 456 7895" is accepted like "1234567895".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NubanChecksum {
    bank_code: BankCode,
}

impl NubanChecksum {
    pub fn new(bank_code: &str) -> Result<Self, NubanError> {
        Ok(NubanChecksum {
            bank_code: BankCode::parse(bank_code)?,
        })
    }

    pub fn bank_code(&self) -> &BankCode {
        &self.bank_code
    }
}

impl Validator for NubanChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid_account_number(&filter_separators(regex_match), &self.bank_code)
    }
}

/// Computes the check digit of `serial_number` for `bank_code`.
///
/// The serial number is left padded with zeros to 9 digits, appended to the
/// normalized bank code and every digit of this cipher is weighted by the
/// matching digit of [`SEED`]. The check digit brings the weighted sum up to
/// the next multiple of 10.
pub fn check_digit(serial_number: &str, bank_code: &str) -> Result<u8, NubanError> {
    let serial = pad_serial_number(serial_number)?;
    let bank_code = BankCode::parse(bank_code)?;
    Ok(compute_check_digit(&bank_code, &serial))
}

/// Builds the 10 digit account number: the padded serial number followed by its check digit.
///
/// Serial numbers longer than 9 digits are rejected, never truncated.
pub fn generate(serial_number: &str, bank_code: &str) -> Result<String, NubanError> {
    let serial = pad_serial_number(serial_number)?;
    let bank_code = BankCode::parse(bank_code)?;
    let check_digit = compute_check_digit(&bank_code, &serial);

    let mut account_number = String::with_capacity(ACCOUNT_NUMBER_LENGTH);
    account_number.extend(serial.iter().map(|b| *b as char));
    account_number.push(char::from(b'0' + check_digit));
    Ok(account_number)
}

/// Returns whether `account_number` carries the right check digit for `bank_code`.
///
/// Anything that is not exactly 10 ASCII digits is simply not valid. Only a
/// malformed bank code is an error.
pub fn validate(account_number: &str, bank_code: &str) -> Result<bool, NubanError> {
    let bank_code = BankCode::parse(bank_code)?;
    Ok(is_valid_account_number(account_number, &bank_code))
}

pub(crate) fn is_valid_account_number(account_number: &str, bank_code: &BankCode) -> bool {
    if account_number.len() != ACCOUNT_NUMBER_LENGTH || !is_digit_string(account_number) {
        return false;
    }

    let (serial, provided) = account_number.as_bytes().split_at(SERIAL_NUMBER_LENGTH);
    let mut padded = [b'0'; SERIAL_NUMBER_LENGTH];
    padded.copy_from_slice(serial);

    compute_check_digit(bank_code, &padded) as u32 == digit_value(provided[0])
}

fn pad_serial_number(serial_number: &str) -> Result<[u8; SERIAL_NUMBER_LENGTH], NubanError> {
    if serial_number.is_empty() || !is_digit_string(serial_number) {
        return Err(NubanError::InvalidInput);
    }
    if serial_number.len() > SERIAL_NUMBER_LENGTH {
        return Err(NubanError::SerialNumberTooLong);
    }

    let mut padded = [b'0'; SERIAL_NUMBER_LENGTH];
    padded[SERIAL_NUMBER_LENGTH - serial_number.len()..].copy_from_slice(serial_number.as_bytes());
    Ok(padded)
}

fn compute_check_digit(bank_code: &BankCode, serial: &[u8; SERIAL_NUMBER_LENGTH]) -> u8 {
    let normalized = bank_code.normalized();
    let sum: u32 = normalized
        .iter()
        .chain(serial.iter())
        .zip(SEED.iter())
        .map(|(digit, weight)| digit_value(*digit) * digit_value(*weight))
        .sum();

    // Kept on unsigned values: 10 - (sum mod 10), where 10 maps back to 0
    let check_digit = 10 - (sum % 10);
    if check_digit == 10 {
        0
    } else {
        check_digit as u8
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::error::NubanError;

pub const SHORT_BANK_CODE_LENGTH: usize = 3;
pub const LONG_BANK_CODE_LENGTH: usize = 5;
pub const NORMALIZED_BANK_CODE_LENGTH: usize = 6;

/// The two numbering eras of the standard. Short codes are the legacy 3 digit
/// codes, long codes the newer 5 digit ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BankCodeKind {
    Short,
    Long,
}

impl BankCodeKind {
    /// Digit used to left pad a code of this kind up to 6 digits. The two
    /// kinds are padded differently so they never collide once normalized.
    fn padding(&self) -> u8 {
        match self {
            BankCodeKind::Short => b'0',
            BankCodeKind::Long => b'9',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankCode {
    kind: BankCodeKind,
    digits: String,
}

impl BankCode {
    pub fn parse(input: &str) -> Result<Self, NubanError> {
        let kind = match input.len() {
            SHORT_BANK_CODE_LENGTH => BankCodeKind::Short,
            LONG_BANK_CODE_LENGTH => BankCodeKind::Long,
            _ => return Err(NubanError::InvalidBankCode),
        };
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NubanError::InvalidBankCode);
        }
        Ok(BankCode {
            kind,
            digits: input.to_string(),
        })
    }

    pub fn kind(&self) -> BankCodeKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Expands the code to exactly 6 digits: "044" becomes "000044" and
    /// "50211" becomes "950211".
    pub fn normalized(&self) -> [u8; NORMALIZED_BANK_CODE_LENGTH] {
        let mut normalized = [self.kind.padding(); NORMALIZED_BANK_CODE_LENGTH];
        let offset = NORMALIZED_BANK_CODE_LENGTH - self.digits.len();
        normalized[offset..].copy_from_slice(self.digits.as_bytes());
        normalized
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl std::str::FromStr for BankCode {
    type Err = NubanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BankCode::parse(s)
    }
}

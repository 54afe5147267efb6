//! Cipher mode selector

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Mode of operation named in a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
}

impl Mode {
    /// Lowercase name, as used in output file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
        }
    }

    /// Whether the mode consumes an initialization vector
    pub fn uses_iv(&self) -> bool {
        matches!(self, Mode::Cbc)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            _ => Err(Error::config(
                "cipher mode",
                format!("unrecognized mode '{}', expected 'ecb' or 'cbc'", s.trim()),
            )),
        }
    }
}

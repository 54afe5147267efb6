//! Legacy four-line configuration format
//!
//! ```text
//! cbc
//! 0123456789abcdeffedcba9876543210
//! 0001020304050607
//! images/lena.png
//! ```
//!
//! Lines are, in order: the mode, the key as hex, the IV as hex and the path
//! of the input image. The IV line is required and validated even in ECB
//! mode, which ignores it.

use std::fs;
use std::path::{Path, PathBuf};

use teacrypt_algorithms::{Iv, TeaKey};

use crate::adapter::{parse_iv_hex, parse_key_hex};
use crate::error::{validate, Result, ResultExt};
use crate::mode::Mode;

/// Number of lines in a configuration file
pub const CONFIG_LINES: usize = 4;

/// Parsed cipher configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CipherConfig {
    /// Mode of operation
    pub mode: Mode,
    /// Cipher key
    pub key: TeaKey,
    /// CBC initialization vector
    pub iv: Iv,
    /// Input image path
    pub path: PathBuf,
}

impl CipherConfig {
    /// Parse configuration text
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        validate::config(
            lines.len() == CONFIG_LINES,
            "configuration",
            format!(
                "expected mode, key, IV and path on {} separate lines, got {} lines",
                CONFIG_LINES,
                lines.len()
            ),
        )?;

        let mode: Mode = lines[0].parse()?;
        let key = parse_key_hex(lines[1])?;
        let iv = parse_iv_hex(lines[2])?;

        let path = lines[3].trim();
        validate::config(!path.is_empty(), "image path", "path is empty")?;

        Ok(Self {
            mode,
            key,
            iv,
            path: PathBuf::from(path),
        })
    }

    /// Read and parse a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context("configuration file")?;
        Self::parse(&text)
    }

    /// The configured IV when the mode uses one
    pub fn effective_iv(&self) -> Option<&Iv> {
        self.mode.uses_iv().then_some(&self.iv)
    }
}

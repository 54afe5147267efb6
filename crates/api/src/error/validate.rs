//! Validation helpers that produce unified API errors

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a configuration condition
#[inline(always)]
pub fn config(condition: bool, context: &'static str, reason: impl Into<String>) -> Result<()> {
    if !condition {
        return Err(Error::config(context, reason));
    }
    Ok(())
}

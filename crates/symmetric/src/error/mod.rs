//! Error handling for the high-level cipher and configuration layer
//!
//! Re-exports the unified API error system and adds the conversion from
//! primitive (engine-level) errors.

// Re-export the primary API error system
pub use teacrypt_api::error::validate;
pub use teacrypt_api::error::{Error, Result, ResultExt};

use teacrypt_algorithms::error::Error as PrimitiveError;

/// Convert a PrimitiveError to an API Error
///
/// Key-width failures surface as [`Error::InvalidKey`] so that callers can
/// treat them as configuration problems; everything else goes through the
/// generic conversion.
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    match err {
        PrimitiveError::Length {
            context: context @ ("TEA key words" | "TEA key bytes"),
            expected,
            actual,
        } => Error::InvalidKey {
            context,
            message: format!("expected {} units, got {}", expected, actual),
        },
        other => other.into(),
    }
}

/// Extension trait to make primitive error conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }
}

// Already the right type, just pass through
impl<T> SymmetricResultExt<T> for Result<T> {
    fn map_primitive_err(self) -> Result<T> {
        self
    }
}

//! Error types for image conversion.
//!
//! This module defines the errors that can occur when validating conversion
//! input at the library boundary.

use thiserror::Error;

/// Main error type for conversion operations.
///
/// Malformed input is a contract violation by the caller; conversion fails
/// fast before producing any output, there is no partial-failure mode.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length does not match the declared dimensions.
    ///
    /// The encoder and the rasterizer both expect exactly
    /// `width * height * 4` bytes of RGBA data.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, found {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Block size outside the supported set.
    ///
    /// Only 2, 4 or 8 pixels can be packed into one output byte. Raw values
    /// are checked at the boundary, never silently coerced.
    #[error("Invalid block size {0}, supported values are 2, 4 and 8")]
    InvalidBlockSize(u8),
}

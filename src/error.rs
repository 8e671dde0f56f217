//! Error types for DSP operations.
//!
//! Every operation reports its outcome through [`Result`]. The variants form a
//! closed set, and each one maps onto the integer status code a C host expects
//! (see [`DspError::code`]).

use thiserror::Error;

/// Result type alias using `DspError`
pub type Result<T> = std::result::Result<T, DspError>;

/// Status code reported for a successful call.
pub const SUCCESS_CODE: i32 = 0;

/// Errors produced by the signal processing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    /// The input buffer was not bound
    #[error("input buffer is null")]
    NullInputBuffer,

    /// The output buffer was not bound
    #[error("output buffer is null")]
    NullOutputBuffer,

    /// A required non-buffer argument was absent
    #[error("required parameter is null")]
    NullParameter,

    /// A parameter was outside its allowed set or range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A decibel value fell outside the conversion domain
    #[error("decibel value {0} is out of range")]
    DecibelOutOfRange(f32),

    /// An amplitude fell outside the canonical range
    #[error("amplitude {0} is out of range")]
    AmplitudeOutOfRange(f32),

    /// An amplitude was infinite
    #[error("amplitude is infinite")]
    AmplitudeIsInfinite,

    /// Reserved catch-all
    #[error("undefined behavior")]
    UndefinedBehavior,

    /// A host-side buffer could not be allocated
    #[error("failed to allocate a buffer of {0} samples")]
    MemoryAllocationFailure(usize),
}

impl DspError {
    /// Shorthand for building an [`DspError::InvalidParameter`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DspError::InvalidParameter(msg.into())
    }

    /// Integer status code for this error, as used across the C ABI.
    ///
    /// # Examples
    ///
    /// ```
    /// use monodsp::DspError;
    ///
    /// assert_eq!(DspError::NullOutputBuffer.code(), 2);
    /// assert_eq!(DspError::AmplitudeOutOfRange(1.5).code(), 1004);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            DspError::NullInputBuffer => 1,
            DspError::NullOutputBuffer => 2,
            DspError::NullParameter => 1000,
            DspError::InvalidParameter(_) => 1001,
            DspError::DecibelOutOfRange(_) => 1003,
            DspError::AmplitudeOutOfRange(_) => 1004,
            DspError::AmplitudeIsInfinite => 1005,
            DspError::UndefinedBehavior => 1006,
            DspError::MemoryAllocationFailure(_) => 1007,
        }
    }
}

/// Collapses a result into its integer status code (0 on success).
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => SUCCESS_CODE,
        Err(err) => err.code(),
    }
}

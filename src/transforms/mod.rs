//! Buffer-to-buffer transforms.
//!
//! Each transform reads a non-empty input slice and writes an output slice of
//! the same length. All parameters are validated before the first output
//! sample is written, so a failed call leaves the output untouched.

mod fade;
mod gain;
mod reverse;

pub use fade::{fade_in, fade_out};
pub use gain::{apply_gain, apply_gain_with, normalize, normalize_with};
pub use reverse::reverse;

use crate::error::{DspError, Result};

/// Checks that `input` is non-empty and `output` matches its length.
pub(crate) fn check_buffers(input: &[f32], output: &[f32]) -> Result<()> {
    if input.is_empty() {
        return Err(DspError::invalid("input buffer is empty"));
    }
    if output.len() != input.len() {
        return Err(DspError::invalid(format!(
            "output length {} does not match input length {}",
            output.len(),
            input.len()
        )));
    }
    Ok(())
}

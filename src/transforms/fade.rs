//! Fade-in and fade-out envelopes.
//!
//! Both fades start at the first sample. The window length is
//! `floor(duration_ms * sample_rate / 1000)` samples, capped at `N - 1` so the
//! last sample of the buffer always sits outside the window.

use super::check_buffers;
use crate::envelopes::FadeShape;
use crate::error::Result;
use crate::rate::SampleRate;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    In,
    Out,
}

/// Fades the start of the buffer in from silence.
///
/// Sample `i` inside the window is multiplied by `shape.apply(i / len)`;
/// samples past the window pass through unchanged.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for bad
/// buffers or an unsupported sample rate.
///
/// # Examples
///
/// ```
/// use monodsp::{FadeShape, fade_in};
///
/// let input = [1.0; 96];
/// let mut out = [0.0; 96];
/// // 1 ms at 48 kHz is a 48-sample window
/// fade_in(&input, &mut out, 1, 48000, FadeShape::Linear).unwrap();
/// assert_eq!(out[0], 0.0);
/// assert_eq!(out[24], 0.5);
/// assert_eq!(out[48], 1.0);
/// ```
pub fn fade_in(
    input: &[f32],
    output: &mut [f32],
    duration_ms: u32,
    sample_rate: u32,
    shape: FadeShape,
) -> Result<()> {
    fade(input, output, duration_ms, sample_rate, shape, Direction::In)
}

/// Fades the start of the buffer out to silence.
///
/// Sample `i` inside the window is multiplied by `1 - shape.apply(i / len)`.
/// The envelope stays at 1 past the window, so everything after the fade is
/// silent.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for bad
/// buffers or an unsupported sample rate.
pub fn fade_out(
    input: &[f32],
    output: &mut [f32],
    duration_ms: u32,
    sample_rate: u32,
    shape: FadeShape,
) -> Result<()> {
    fade(input, output, duration_ms, sample_rate, shape, Direction::Out)
}

fn fade(
    input: &[f32],
    output: &mut [f32],
    duration_ms: u32,
    sample_rate: u32,
    shape: FadeShape,
    direction: Direction,
) -> Result<()> {
    trace!(
        samples = input.len(),
        duration_ms,
        sample_rate,
        ?shape,
        ?direction,
        "fade"
    );
    let rate = check_buffers(input, output)
        .and_then(|()| SampleRate::try_from(sample_rate))
        .inspect_err(|err| debug!(%err, ?direction, "fade rejected"))?;
    let len = fade_length(duration_ms, rate, input.len());

    for (i, (out, &sample)) in output.iter_mut().zip(input).enumerate() {
        let envelope = if i < len {
            shape.apply((i as f64 / len as f64) as f32)
        } else {
            1.0
        };
        *out = match direction {
            Direction::In => sample * envelope,
            Direction::Out => sample * (1.0 - envelope),
        };
    }
    Ok(())
}

/// Fade window length in samples for a buffer of `buffer_len` samples.
pub(crate) fn fade_length(duration_ms: u32, rate: SampleRate, buffer_len: usize) -> usize {
    let samples = u64::from(duration_ms) * u64::from(rate.as_hz()) / 1000;
    let samples = usize::try_from(samples).unwrap_or(usize::MAX);
    samples.min(buffer_len.saturating_sub(1))
}

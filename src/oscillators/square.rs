//! Square wave oscillator implementation.

use super::{Oscillator, SineOscillator, check_non_negative, check_output};
use crate::error::Result;
use crate::rate::SampleRate;
use crate::Signal;
use tracing::{debug, trace};

/// A hard-clipped square wave.
///
/// Follows the sign of a sine of the same frequency: `+amplitude` while the
/// sine is non-negative, `-amplitude` otherwise. Not band-limited; see
/// [`AdditiveOscillator`](super::AdditiveOscillator) for that.
#[derive(Debug, Clone)]
pub struct SquareOscillator {
    sine: SineOscillator,
    amplitude: f64,
}

impl SquareOscillator {
    /// Creates a square of `frequency` Hz switching between `±amplitude`.
    pub fn new(frequency: f64, amplitude: f64, sample_rate: SampleRate) -> Self {
        Self {
            sine: SineOscillator::new(frequency, 1.0, sample_rate),
            amplitude,
        }
    }
}

impl Signal for SquareOscillator {
    fn next_sample(&mut self) -> f64 {
        if self.sine.next_sample() >= 0.0 {
            self.amplitude
        } else {
            -self.amplitude
        }
    }
}

impl Oscillator for SquareOscillator {
    fn frequency(&self) -> f64 {
        self.sine.frequency()
    }

    fn reset(&mut self) {
        self.sine.reset();
    }
}

/// Fills `output` with a square wave of `freq` Hz switching between `±amp`.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for an
/// empty buffer, an unsupported sample rate, or a negative frequency. 0 Hz
/// holds `+amp`.
pub fn generate_square(output: &mut [f32], freq: f32, amp: f32, sample_rate: u32) -> Result<()> {
    trace!(samples = output.len(), freq, amp, sample_rate, "generate_square");
    let rate = check_output(output, sample_rate)
        .and_then(|rate| check_non_negative("frequency", freq).map(|()| rate))
        .inspect_err(|err| debug!(%err, "generate_square rejected"))?;

    SquareOscillator::new(freq as f64, amp as f64, rate).process(output);
    Ok(())
}

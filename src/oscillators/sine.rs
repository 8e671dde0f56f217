//! Sine wave oscillator implementation.

use super::{Oscillator, check_non_negative, check_output};
use crate::error::Result;
use crate::rate::SampleRate;
use crate::Signal;
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// A sine oscillator evaluated from absolute time.
///
/// Sample `i` is `amplitude * sin(2π * frequency * i / sample_rate)`. The phase
/// is recomputed from the sample index rather than accumulated, so long
/// renders do not drift.
///
/// # Examples
///
/// ```
/// use monodsp::{SampleRate, Signal, SineOscillator};
///
/// let mut osc = SineOscillator::new(440.0, 1.0, SampleRate::Hz44100);
/// assert_eq!(osc.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SineOscillator {
    frequency: f64,
    amplitude: f64,
    sample_rate: f64,
    index: u64,
}

impl SineOscillator {
    /// Creates a sine of `frequency` Hz and peak `amplitude`, starting at phase 0.
    pub fn new(frequency: f64, amplitude: f64, sample_rate: SampleRate) -> Self {
        Self {
            frequency,
            amplitude,
            sample_rate: sample_rate.as_f64(),
            index: 0,
        }
    }

    /// Phase in radians of the next sample.
    pub(crate) fn phase(&self) -> f64 {
        TAU * self.frequency * self.index as f64 / self.sample_rate
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * self.phase().sin();
        self.index += 1;
        sample
    }
}

impl Oscillator for SineOscillator {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

/// Fills `output` with a sine wave of `freq` Hz and peak `amp`.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for an
/// empty buffer, an unsupported sample rate, or a negative frequency. 0 Hz is
/// allowed and produces silence.
pub fn generate_sine(output: &mut [f32], freq: f32, amp: f32, sample_rate: u32) -> Result<()> {
    trace!(samples = output.len(), freq, amp, sample_rate, "generate_sine");
    let rate = check_output(output, sample_rate)
        .and_then(|rate| check_non_negative("frequency", freq).map(|()| rate))
        .inspect_err(|err| debug!(%err, "generate_sine rejected"))?;

    SineOscillator::new(freq as f64, amp as f64, rate).process(output);
    Ok(())
}

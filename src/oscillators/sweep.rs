//! Linear frequency sweep (chirp).

use super::{Oscillator, check_non_negative, check_output, gain_to_amplitude};
use crate::error::Result;
use crate::rate::SampleRate;
use crate::Signal;
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// A sine whose frequency rises (or falls) linearly over a fixed length.
///
/// Phase is accumulated sample by sample using the instantaneous frequency and
/// wrapped into `[0, 2π)`, which keeps the waveform continuous while the
/// frequency moves.
///
/// # Examples
///
/// ```
/// use monodsp::{SampleRate, Signal, SweptSine};
///
/// // 100 Hz to 1 kHz over one second
/// let mut sweep = SweptSine::new(100.0, 1000.0, 44100, 1.0, SampleRate::Hz44100);
/// let mut buffer = vec![0.0_f32; 44100];
/// sweep.process(&mut buffer);
/// ```
#[derive(Debug, Clone)]
pub struct SweptSine {
    start_frequency: f64,
    frequency: f64,
    increment: f64,
    amplitude: f64,
    sample_rate: f64,
    phase: f64,
}

impl SweptSine {
    /// Creates a sweep from `start` to `end` Hz spread over `length` samples.
    pub fn new(start: f64, end: f64, length: usize, amplitude: f64, sample_rate: SampleRate) -> Self {
        let increment = if length == 0 {
            0.0
        } else {
            (end - start) / length as f64
        };
        Self {
            start_frequency: start,
            frequency: start,
            increment,
            amplitude,
            sample_rate: sample_rate.as_f64(),
            phase: 0.0,
        }
    }

    /// Current phase in radians, always in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Signal for SweptSine {
    fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * self.phase.sin();

        self.frequency += self.increment;
        self.phase = (self.phase + TAU * self.frequency / self.sample_rate).rem_euclid(TAU);

        sample
    }
}

impl Oscillator for SweptSine {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.frequency = self.start_frequency;
        self.phase = 0.0;
    }
}

/// Fills `output` with a sine sweeping linearly from `start_freq` to `end_freq`.
///
/// The amplitude is constant at `10^(gain_db / 20)`.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for an
/// empty buffer, an unsupported sample rate, a negative endpoint frequency, or
/// a non-finite gain.
pub fn generate_ramp_sine(
    output: &mut [f32],
    start_freq: f32,
    end_freq: f32,
    gain_db: f32,
    sample_rate: u32,
) -> Result<()> {
    trace!(
        samples = output.len(),
        start_freq,
        end_freq,
        gain_db,
        sample_rate,
        "generate_ramp_sine"
    );
    let (rate, amplitude) = check_output(output, sample_rate)
        .and_then(|rate| {
            check_non_negative("start frequency", start_freq)?;
            check_non_negative("end frequency", end_freq)?;
            Ok((rate, gain_to_amplitude(gain_db)?))
        })
        .inspect_err(|err| debug!(%err, "generate_ramp_sine rejected"))?;

    SweptSine::new(
        start_freq as f64,
        end_freq as f64,
        output.len(),
        amplitude,
        rate,
    )
    .process(output);
    Ok(())
}

//! Triangle wave oscillator implementation.

use super::{Oscillator, check_output, check_positive};
use crate::error::Result;
use crate::rate::SampleRate;
use crate::Signal;
use tracing::{debug, trace};

/// A piecewise-linear wave built from time modulo the half-period.
///
/// Time is measured in half-periods of `1 / (2 * frequency)` seconds. Within
/// every half-period the output ramps from `-amplitude` towards `+amplitude`,
/// then restarts at `-amplitude`, so it depends only on `t mod half-period`.
#[derive(Debug, Clone)]
pub struct TriangleOscillator {
    frequency: f64,
    amplitude: f64,
    sample_rate: f64,
    index: u64,
}

impl TriangleOscillator {
    /// Creates a ramp of `frequency` Hz spanning `±amplitude`.
    pub fn new(frequency: f64, amplitude: f64, sample_rate: SampleRate) -> Self {
        Self {
            frequency,
            amplitude,
            sample_rate: sample_rate.as_f64(),
            index: 0,
        }
    }
}

impl Signal for TriangleOscillator {
    fn next_sample(&mut self) -> f64 {
        let half_periods = self.index as f64 * 2.0 * self.frequency / self.sample_rate;
        let position = half_periods.fract();

        self.index += 1;
        self.amplitude * (2.0 * position - 1.0)
    }
}

impl Oscillator for TriangleOscillator {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

/// Fills `output` with a triangle wave of `freq` Hz ranging over `±amp`.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for an
/// empty buffer, an unsupported sample rate, or a frequency that is not
/// strictly positive (the half-period would be unbounded).
pub fn generate_triangle(output: &mut [f32], freq: f32, amp: f32, sample_rate: u32) -> Result<()> {
    trace!(samples = output.len(), freq, amp, sample_rate, "generate_triangle");
    let rate = check_output(output, sample_rate)
        .and_then(|rate| check_positive("frequency", freq).map(|()| rate))
        .inspect_err(|err| debug!(%err, "generate_triangle rejected"))?;

    TriangleOscillator::new(freq as f64, amp as f64, rate).process(output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_shape() {
        // 1 kHz at 48 kHz: 24 samples per half-period
        let mut out = [0.0; 96];
        generate_triangle(&mut out, 1000.0, 1.0, 48000).unwrap();
        assert_eq!(out[0], -1.0);
        assert_eq!(out[6], -0.5);
        assert_eq!(out[12], 0.0);
        // every half-period restarts the rising ramp
        assert_eq!(out[24], -1.0);
        assert_eq!(out[48], -1.0);
    }

    #[test]
    fn test_depends_only_on_position_in_half_period() {
        let mut out = [0.0; 96];
        generate_triangle(&mut out, 1000.0, 1.0, 48000).unwrap();
        for i in 0..24 {
            assert!((out[i + 24] - out[i]).abs() < 1e-6, "sample {i}");
            assert!((out[i + 48] - out[i]).abs() < 1e-6, "sample {i}");
        }
        assert_eq!(out[30], out[6]);
    }

    #[test]
    fn test_linearity() {
        let mut out = [0.0; 20];
        generate_triangle(&mut out, 100.0, 1.0, 44100).unwrap();
        let step = out[1] - out[0];
        for w in out.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sample_range() {
        let mut out = vec![0.0; 44100];
        generate_triangle(&mut out, 441.0, 0.8, 44100).unwrap();
        assert!(out.iter().all(|&s| (-0.8..0.8).contains(&s)));
    }

    #[test]
    fn test_ramp_steps() {
        // rising steps of 4·f/rate inside a half-period, one drop back to -amp at each boundary
        let mut out = vec![0.0; 4800];
        generate_triangle(&mut out, 300.0, 1.0, 48000).unwrap();
        let step = 4.0 * 300.0 / 48000.0;
        for w in out.windows(2) {
            let delta = w[1] - w[0];
            assert!((delta - step).abs() < 1e-5 || delta < -1.5, "{delta}");
        }
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let mut out = [0.0; 4];
        assert!(generate_triangle(&mut out, 0.0, 1.0, 44100).is_err());
        assert!(generate_triangle(&mut out, 100.0, 1.0, 44101).is_err());
    }

    #[test]
    fn test_reset() {
        let mut osc = TriangleOscillator::new(50.0, 1.0, SampleRate::Hz96000);
        for _ in 0..500 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), -1.0);
    }
}

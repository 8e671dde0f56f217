//! Periodic waveform generators.
//!
//! Each waveform exists in two forms:
//! - an oscillator type implementing [`Signal`](crate::Signal) and
//!   [`Oscillator`], for callers that want samples one at a time
//! - a `generate_*` function that validates its parameters and fills a
//!   caller-owned buffer
//!
//! All phase arithmetic is done in `f64`; only the written samples are `f32`.

mod additive;
mod sine;
mod square;
mod sweep;
mod traits;
mod triangle;

pub use additive::{
    AdditiveOscillator, HarmonicSeries, generate_additive_square, generate_additive_triangle,
};
pub use sine::{SineOscillator, generate_sine};
pub use square::{SquareOscillator, generate_square};
pub use sweep::{SweptSine, generate_ramp_sine};
pub use traits::Oscillator;
pub use triangle::{TriangleOscillator, generate_triangle};

use crate::error::{DspError, Result};
use crate::rate::SampleRate;

/// Validates the output buffer and sample rate shared by every generator.
pub(crate) fn check_output(output: &[f32], sample_rate: u32) -> Result<SampleRate> {
    if output.is_empty() {
        return Err(DspError::invalid("output buffer is empty"));
    }
    SampleRate::try_from(sample_rate)
}

/// Rejects negative or NaN frequencies.
pub(crate) fn check_non_negative(name: &str, freq: f32) -> Result<()> {
    if freq >= 0.0 {
        Ok(())
    } else {
        Err(DspError::invalid(format!("{name} {freq} Hz must not be negative")))
    }
}

/// Rejects zero, negative or NaN frequencies.
pub(crate) fn check_positive(name: &str, freq: f32) -> Result<()> {
    if freq > 0.0 {
        Ok(())
    } else {
        Err(DspError::invalid(format!("{name} {freq} Hz must be positive")))
    }
}

/// Linear amplitude for a gain in decibels (`10^(db/20)`).
pub(crate) fn gain_to_amplitude(gain_db: f32) -> Result<f64> {
    if !gain_db.is_finite() {
        return Err(DspError::invalid(format!("gain {gain_db} dB is not finite")));
    }
    Ok(10.0_f64.powf(gain_db as f64 / 20.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output() {
        assert_eq!(check_output(&[0.0; 4], 96000), Ok(SampleRate::Hz96000));
        assert!(check_output(&[], 44100).is_err());
        assert!(check_output(&[0.0; 4], 44101).is_err());
    }

    #[test]
    fn test_frequency_checks() {
        assert!(check_non_negative("frequency", 0.0).is_ok());
        assert!(check_non_negative("frequency", -1.0).is_err());
        assert!(check_non_negative("frequency", f32::NAN).is_err());
        assert!(check_positive("frequency", 0.0).is_err());
        assert!(check_positive("frequency", 0.1).is_ok());
    }

    #[test]
    fn test_gain_to_amplitude() {
        assert_eq!(gain_to_amplitude(0.0), Ok(1.0));
        assert!((gain_to_amplitude(-20.0).unwrap() - 0.1).abs() < 1e-12);
        assert!(gain_to_amplitude(f32::INFINITY).is_err());
    }
}

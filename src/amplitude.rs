//! Conversions between linear amplitude and decibels.
//!
//! 0 dB is full scale (amplitude 1.0) and quieter levels are negative.
//! [`SILENCE_DB`] stands in for amplitude 0, which has no finite logarithm.

use crate::error::{DspError, Result};

/// Decibel value that represents silence.
pub const SILENCE_DB: f32 = -180.0;

/// Highest level accepted by [`decibels_to_amplitude`].
pub const MAX_LEVEL_DB: f32 = 1.0;

/// Lowest gain change accepted by the gain stage.
pub const MIN_GAIN_DB: f32 = -100.0;

/// Highest gain change accepted by the gain stage.
pub const MAX_GAIN_DB: f32 = 20.0;

/// How an exact 0 dB input is turned into a linear factor.
///
/// The historical conversion table maps 0 dB to silence rather than to unity.
/// Both behaviors are kept and selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDbMapping {
    /// 0 dB maps to amplitude 0.
    Silence,
    /// 0 dB maps to amplitude 1.
    #[default]
    Unity,
}

impl ZeroDbMapping {
    fn zero_db_factor(self) -> f32 {
        match self {
            ZeroDbMapping::Silence => 0.0,
            ZeroDbMapping::Unity => 1.0,
        }
    }
}

/// Converts a linear amplitude to decibels.
///
/// The sign of `amp` is ignored. Amplitude 0 yields [`SILENCE_DB`].
///
/// # Errors
///
/// - [`DspError::AmplitudeOutOfRange`] if `|amp| > 1` or `amp` is NaN
/// - [`DspError::AmplitudeIsInfinite`] if `amp` is infinite
///
/// # Examples
///
/// ```
/// use monodsp::amplitude_to_decibels;
///
/// assert_eq!(amplitude_to_decibels(1.0).unwrap(), 0.0);
/// assert_eq!(amplitude_to_decibels(0.0).unwrap(), -180.0);
/// assert!(amplitude_to_decibels(1.5).is_err());
/// ```
pub fn amplitude_to_decibels(amp: f32) -> Result<f32> {
    let magnitude = amp.abs();
    if magnitude.is_infinite() {
        return Err(DspError::AmplitudeIsInfinite);
    }
    if magnitude > 0.0 && magnitude <= 1.0 {
        Ok((20.0 * (magnitude as f64).log10()) as f32)
    } else if magnitude == 0.0 {
        Ok(SILENCE_DB)
    } else {
        Err(DspError::AmplitudeOutOfRange(amp))
    }
}

/// Converts decibels to a linear amplitude, mapping exactly 0 dB to silence.
///
/// This is the historical conversion. Use [`decibels_to_amplitude_with`] and
/// [`ZeroDbMapping::Unity`] for the conventional 0 dB = 1.0 mapping.
///
/// # Errors
///
/// [`DspError::DecibelOutOfRange`] if `db` is outside `[-180, 1]` or NaN.
///
/// # Examples
///
/// ```
/// use monodsp::decibels_to_amplitude;
///
/// assert_eq!(decibels_to_amplitude(0.0).unwrap(), 0.0);
/// assert!((decibels_to_amplitude(-6.0).unwrap() - 0.501).abs() < 1e-3);
/// ```
pub fn decibels_to_amplitude(db: f32) -> Result<f32> {
    decibels_to_amplitude_with(db, ZeroDbMapping::Silence)
}

/// Converts decibels to a linear amplitude with an explicit 0 dB mapping.
///
/// # Errors
///
/// [`DspError::DecibelOutOfRange`] if `db` is outside `[-180, 1]` or NaN.
pub fn decibels_to_amplitude_with(db: f32, mapping: ZeroDbMapping) -> Result<f32> {
    if !(SILENCE_DB..=MAX_LEVEL_DB).contains(&db) {
        return Err(DspError::DecibelOutOfRange(db));
    }
    Ok(db_to_factor(db, mapping))
}

/// Converts a gain change in decibels to a linear multiplier.
///
/// Gain changes are not levels: they may boost, so the domain is
/// `[MIN_GAIN_DB, MAX_GAIN_DB]` rather than the level domain.
///
/// # Errors
///
/// [`DspError::DecibelOutOfRange`] if `db_change` is outside `[-100, 20]` or NaN.
pub fn gain_factor(db_change: f32, mapping: ZeroDbMapping) -> Result<f32> {
    if !(MIN_GAIN_DB..=MAX_GAIN_DB).contains(&db_change) {
        return Err(DspError::DecibelOutOfRange(db_change));
    }
    Ok(db_to_factor(db_change, mapping))
}

fn db_to_factor(db: f32, mapping: ZeroDbMapping) -> f32 {
    if db == 0.0 {
        return mapping.zero_db_factor();
    }
    10.0_f64.powf(db as f64 / 20.0) as f32
}

/// Largest absolute sample value in `samples` (0 for an empty slice).
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0_f32, |peak, s| peak.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_full_scale_is_zero_db() {
        assert_eq!(amplitude_to_decibels(1.0), Ok(0.0));
        assert_eq!(amplitude_to_decibels(-1.0), Ok(0.0));
    }

    #[test]
    fn test_zero_amplitude_is_silence() {
        assert_eq!(amplitude_to_decibels(0.0), Ok(SILENCE_DB));
        assert_eq!(amplitude_to_decibels(-0.0), Ok(SILENCE_DB));
    }

    #[test]
    fn test_half_amplitude() {
        let db = amplitude_to_decibels(0.5).unwrap();
        assert!(approx_eq(db, -6.0206));
        assert_eq!(amplitude_to_decibels(-0.5).unwrap(), db);
    }

    #[test]
    fn test_amplitude_out_of_range() {
        assert_eq!(
            amplitude_to_decibels(1.5),
            Err(DspError::AmplitudeOutOfRange(1.5))
        );
        assert!(matches!(
            amplitude_to_decibels(f32::NAN),
            Err(DspError::AmplitudeOutOfRange(_))
        ));
        assert_eq!(
            amplitude_to_decibels(f32::NEG_INFINITY),
            Err(DspError::AmplitudeIsInfinite)
        );
    }

    #[test]
    fn test_zero_db_special_case() {
        assert_eq!(decibels_to_amplitude(0.0), Ok(0.0));
        assert_eq!(
            decibels_to_amplitude_with(0.0, ZeroDbMapping::Unity),
            Ok(1.0)
        );
    }

    #[test]
    fn test_silence_db_converts() {
        let amp = decibels_to_amplitude(SILENCE_DB).unwrap();
        assert!((amp - 1e-9).abs() < 1e-12);
    }

    #[test]
    fn test_decibel_domain() {
        assert!(decibels_to_amplitude(1.0).is_ok());
        assert_eq!(
            decibels_to_amplitude(1.5),
            Err(DspError::DecibelOutOfRange(1.5))
        );
        assert_eq!(
            decibels_to_amplitude(-180.5),
            Err(DspError::DecibelOutOfRange(-180.5))
        );
        assert!(decibels_to_amplitude(f32::NAN).is_err());
    }

    #[test]
    fn test_round_trip_below_zero() {
        for db in [-1.0, -6.0, -20.0, -60.0, -120.0] {
            let amp = decibels_to_amplitude(db).unwrap();
            let back = amplitude_to_decibels(amp).unwrap();
            assert!((back - db).abs() < 1e-3, "{db} -> {amp} -> {back}");
        }
    }

    #[test]
    fn test_gain_factor_domain() {
        assert!(approx_eq(
            gain_factor(20.0, ZeroDbMapping::Unity).unwrap(),
            10.0
        ));
        assert!(approx_eq(
            gain_factor(-20.0, ZeroDbMapping::Unity).unwrap(),
            0.1
        ));
        assert_eq!(gain_factor(0.0, ZeroDbMapping::Silence), Ok(0.0));
        assert_eq!(
            gain_factor(20.5, ZeroDbMapping::Unity),
            Err(DspError::DecibelOutOfRange(20.5))
        );
        assert!(gain_factor(-100.5, ZeroDbMapping::Unity).is_err());
    }

    #[test]
    fn test_peak_amplitude() {
        assert_eq!(peak_amplitude(&[]), 0.0);
        assert_eq!(peak_amplitude(&[0.1, -0.9, 0.3]), 0.9);
    }

    #[test]
    fn test_default_mapping_is_unity() {
        assert_eq!(ZeroDbMapping::default(), ZeroDbMapping::Unity);
    }
}

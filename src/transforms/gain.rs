//! Static gain change and peak normalization.

use super::check_buffers;
use crate::amplitude::{
    MAX_GAIN_DB, MIN_GAIN_DB, ZeroDbMapping, amplitude_to_decibels, gain_factor, peak_amplitude,
};
use crate::error::{DspError, Result};
use tracing::{debug, trace};

/// Scales every sample by a gain change given in decibels.
///
/// Uses the conventional 0 dB = unity mapping; see [`apply_gain_with`].
///
/// # Errors
///
/// - [`DspError::InvalidParameter`] for bad buffers or `db_change` outside `[-100, 20]`
/// - [`DspError::DecibelOutOfRange`] if the decibel conversion rejects the value
///
/// # Examples
///
/// ```
/// use monodsp::apply_gain;
///
/// let mut out = [0.0; 2];
/// apply_gain(&[0.5, -0.5], &mut out, -6.0206).unwrap();
/// assert!((out[0] - 0.25).abs() < 1e-4);
/// ```
pub fn apply_gain(input: &[f32], output: &mut [f32], db_change: f32) -> Result<()> {
    apply_gain_with(input, output, db_change, ZeroDbMapping::default())
}

/// [`apply_gain`] with an explicit 0 dB mapping.
pub fn apply_gain_with(
    input: &[f32],
    output: &mut [f32],
    db_change: f32,
    mapping: ZeroDbMapping,
) -> Result<()> {
    trace!(samples = input.len(), db_change, ?mapping, "apply_gain");
    let factor = gain_stage_factor(input, output, db_change, mapping)
        .inspect_err(|err| debug!(%err, "apply_gain rejected"))?;

    for (out, &sample) in output.iter_mut().zip(input) {
        *out = sample * factor;
    }
    Ok(())
}

fn gain_stage_factor(
    input: &[f32],
    output: &[f32],
    db_change: f32,
    mapping: ZeroDbMapping,
) -> Result<f32> {
    check_buffers(input, output)?;
    if !(MIN_GAIN_DB..=MAX_GAIN_DB).contains(&db_change) {
        return Err(DspError::invalid(format!(
            "gain change {db_change} dB is outside [{MIN_GAIN_DB}, {MAX_GAIN_DB}]"
        )));
    }
    gain_factor(db_change, mapping)
}

/// Scales the buffer so that its peak lands on `threshold_db`.
///
/// The peak is measured, converted to decibels, and the difference to the
/// threshold is applied through [`apply_gain`]. A silent buffer measures at
/// -180 dB, which asks for a gain beyond the gain stage's range and is
/// rejected there.
///
/// # Errors
///
/// - [`DspError::InvalidParameter`] for bad buffers, a non-finite threshold, or
///   a required gain outside `[-100, 20]` dB
/// - [`DspError::AmplitudeOutOfRange`] if the input peaks above 1.0
///
/// # Examples
///
/// ```
/// use monodsp::{amplitude_to_decibels, normalize};
///
/// let mut out = [0.0; 3];
/// normalize(&[0.1, -0.25, 0.2], &mut out, -3.0).unwrap();
/// let peak = out.iter().fold(0.0_f32, |p, s| p.max(s.abs()));
/// assert!((amplitude_to_decibels(peak).unwrap() + 3.0).abs() < 1e-3);
/// ```
pub fn normalize(input: &[f32], output: &mut [f32], threshold_db: f32) -> Result<()> {
    normalize_with(input, output, threshold_db, ZeroDbMapping::default())
}

/// [`normalize`] with an explicit 0 dB mapping for the gain stage.
pub fn normalize_with(
    input: &[f32],
    output: &mut [f32],
    threshold_db: f32,
    mapping: ZeroDbMapping,
) -> Result<()> {
    trace!(samples = input.len(), threshold_db, ?mapping, "normalize");
    let change = normalization_change(input, output, threshold_db)
        .inspect_err(|err| debug!(%err, "normalize rejected"))?;
    debug!(change, "normalize gain change");
    apply_gain_with(input, output, change, mapping)
}

fn normalization_change(input: &[f32], output: &[f32], threshold_db: f32) -> Result<f32> {
    check_buffers(input, output)?;
    if !threshold_db.is_finite() {
        return Err(DspError::invalid(format!(
            "normalize threshold {threshold_db} dB is not finite"
        )));
    }
    let peak_db = amplitude_to_decibels(peak_amplitude(input))?;
    Ok(threshold_db - peak_db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_db_is_identity() {
        let input = [0.1, -0.5, 0.9, 0.0];
        let mut out = [0.0; 4];
        apply_gain(&input, &mut out, 0.0).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_zero_db_silence_mapping() {
        let input = [0.1, -0.5, 0.9];
        let mut out = [1.0; 3];
        apply_gain_with(&input, &mut out, 0.0, ZeroDbMapping::Silence).unwrap();
        assert_eq!(out, [0.0; 3]);
    }

    #[test]
    fn test_boost_and_cut() {
        let input = [0.01, -0.02];
        let mut out = [0.0; 2];
        apply_gain(&input, &mut out, 20.0).unwrap();
        assert!((out[0] - 0.1).abs() < 1e-6);
        assert!((out[1] + 0.2).abs() < 1e-6);

        apply_gain(&input, &mut out, -20.0).unwrap();
        assert!((out[0] - 0.001).abs() < 1e-7);
    }

    #[test]
    fn test_gain_range() {
        let mut out = [7.0; 2];
        for db in [-100.5, 20.5, f32::NAN] {
            assert!(matches!(
                apply_gain(&[0.5, 0.5], &mut out, db),
                Err(DspError::InvalidParameter(_))
            ));
        }
        assert_eq!(out, [7.0; 2]);
        assert!(apply_gain(&[0.5, 0.5], &mut out, -100.0).is_ok());
    }

    #[test]
    fn test_normalize_to_full_scale() {
        let input = [0.25, -0.5, 0.125];
        let mut out = [0.0; 3];
        normalize(&input, &mut out, 0.0).unwrap();
        assert!((peak_amplitude(&out) - 1.0).abs() < 1e-5);
        assert!((out[0] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_already_at_threshold() {
        let input = [0.5, -1.0];
        let mut out = [0.0; 2];
        normalize(&input, &mut out, 0.0).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_normalize_silent_input() {
        let mut out = [3.0; 4];
        assert!(matches!(
            normalize(&[0.0; 4], &mut out, -1.0),
            Err(DspError::InvalidParameter(_))
        ));
        assert_eq!(out, [3.0; 4]);
    }

    #[test]
    fn test_normalize_rejects_hot_input() {
        let mut out = [0.0; 2];
        assert_eq!(
            normalize(&[0.5, 1.5], &mut out, -1.0),
            Err(DspError::AmplitudeOutOfRange(1.5))
        );
    }

    #[test]
    fn test_normalize_rejects_non_finite_threshold() {
        let mut out = [0.0; 2];
        assert!(normalize(&[0.5, 0.5], &mut out, f32::INFINITY).is_err());
    }
}

//! Supported sample rates.

use crate::error::{DspError, Result};
use std::fmt;

/// The fixed set of sample rates the operations accept.
///
/// Operations take the rate as a plain `u32` and validate it through
/// [`SampleRate::try_from`], so a host passing an arbitrary integer gets an
/// [`DspError::InvalidParameter`] rather than a silently resampled result.
///
/// # Examples
///
/// ```
/// use monodsp::SampleRate;
///
/// let rate = SampleRate::try_from(48000).unwrap();
/// assert_eq!(rate, SampleRate::Hz48000);
/// assert!(SampleRate::try_from(44101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRate {
    Hz44100,
    Hz48000,
    Hz88200,
    Hz96000,
    Hz176400,
    Hz192000,
}

impl SampleRate {
    /// Every supported rate, lowest first.
    pub const ALL: [SampleRate; 6] = [
        SampleRate::Hz44100,
        SampleRate::Hz48000,
        SampleRate::Hz88200,
        SampleRate::Hz96000,
        SampleRate::Hz176400,
        SampleRate::Hz192000,
    ];

    /// Rate in Hz.
    pub fn as_hz(self) -> u32 {
        match self {
            SampleRate::Hz44100 => 44100,
            SampleRate::Hz48000 => 48000,
            SampleRate::Hz88200 => 88200,
            SampleRate::Hz96000 => 96000,
            SampleRate::Hz176400 => 176400,
            SampleRate::Hz192000 => 192000,
        }
    }

    /// Rate in Hz as `f64`, for phase arithmetic.
    pub fn as_f64(self) -> f64 {
        self.as_hz() as f64
    }

    /// Validates a rate for the tremolo effect, which only runs at 44.1 and 48 kHz.
    pub fn for_tremolo(hz: u32) -> Result<Self> {
        match Self::try_from(hz)? {
            rate @ (SampleRate::Hz44100 | SampleRate::Hz48000) => Ok(rate),
            _ => Err(DspError::invalid(format!(
                "sample rate {hz} is not supported by tremolo (44100 or 48000)"
            ))),
        }
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = DspError;

    fn try_from(hz: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.as_hz() == hz)
            .ok_or_else(|| DspError::invalid(format!("sample rate {hz} is not supported")))
    }
}

impl From<SampleRate> for u32 {
    fn from(rate: SampleRate) -> Self {
        rate.as_hz()
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.as_hz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rates_round_trip() {
        for rate in SampleRate::ALL {
            assert_eq!(SampleRate::try_from(rate.as_hz()), Ok(rate));
        }
    }

    #[test]
    fn test_rejects_unlisted_rates() {
        for hz in [0, 8000, 22050, 44101, 47999, 384000] {
            assert!(matches!(
                SampleRate::try_from(hz),
                Err(DspError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_tremolo_subset() {
        assert_eq!(SampleRate::for_tremolo(44100), Ok(SampleRate::Hz44100));
        assert_eq!(SampleRate::for_tremolo(48000), Ok(SampleRate::Hz48000));
        assert!(SampleRate::for_tremolo(96000).is_err());
        assert!(SampleRate::for_tremolo(44101).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SampleRate::Hz88200.to_string(), "88200 Hz");
    }
}

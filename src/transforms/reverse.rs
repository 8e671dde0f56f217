//! Sample-order reversal.

use super::check_buffers;
use crate::error::Result;
use tracing::{debug, trace};

/// Writes `input` into `output` back to front, so the sound plays backwards.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) if the
/// input is empty or the lengths differ.
///
/// # Examples
///
/// ```
/// use monodsp::reverse;
///
/// let mut out = [0.0; 3];
/// reverse(&[1.0, 2.0, 3.0], &mut out).unwrap();
/// assert_eq!(out, [3.0, 2.0, 1.0]);
/// ```
pub fn reverse(input: &[f32], output: &mut [f32]) -> Result<()> {
    trace!(samples = input.len(), "reverse");
    check_buffers(input, output).inspect_err(|err| debug!(%err, "reverse rejected"))?;

    for (out, &sample) in output.iter_mut().zip(input.iter().rev()) {
        *out = sample;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DspError;

    #[test]
    fn test_single_sample() {
        let mut out = [0.0];
        reverse(&[0.7], &mut out).unwrap();
        assert_eq!(out, [0.7]);
    }

    #[test]
    fn test_twice_is_identity() {
        let input = [0.1, -0.2, 0.3, -0.4, 0.5];
        let mut once = [0.0; 5];
        let mut twice = [0.0; 5];
        reverse(&input, &mut once).unwrap();
        reverse(&once, &mut twice).unwrap();
        assert_eq!(once, [0.5, -0.4, 0.3, -0.2, 0.1]);
        assert_eq!(twice, input);
    }

    #[test]
    fn test_rejects_bad_buffers() {
        let mut out = [9.0; 2];
        assert!(matches!(
            reverse(&[1.0, 2.0, 3.0], &mut out),
            Err(DspError::InvalidParameter(_))
        ));
        assert_eq!(out, [9.0; 2]);
        assert!(reverse(&[], &mut []).is_err());
    }
}

//! C ABI for hosts that hand over raw pointer/length pairs.
//!
//! Every entry point returns the integer status code of [`DspError::code`]
//! (0 on success). Arguments are checked in a fixed order: input pointer,
//! sample count, output pointer, then the operation's own parameters.
//! Generators have no input and check the output pointer first.
//!
//! An input and output pointer that are equal are accepted and processed in
//! place. Buffers that partially overlap are not supported.

#![allow(non_snake_case)]

use crate::envelopes::FadeShape;
use crate::error::{DspError, Result, status_code};
use crate::{amplitude, effects, oscillators, transforms};
use std::ffi::c_int;
use std::{ptr, slice};

fn sample_count(n: c_int) -> Result<usize> {
    usize::try_from(n)
        .ok()
        .filter(|&len| len > 0)
        .ok_or_else(|| DspError::invalid(format!("sample count {n} must be positive")))
}

fn non_negative(name: &str, value: c_int) -> Result<u32> {
    u32::try_from(value).map_err(|_| DspError::invalid(format!("{name} {value} is negative")))
}

/// Resolves an input/output pair and hands both slices to `op`.
///
/// # Safety
///
/// Non-null pointers must be valid for `n` samples. `output` must not be
/// aliased elsewhere, except by `input` pointing at the same address.
unsafe fn with_buffers(
    input: *const f32,
    n: c_int,
    output: *mut f32,
    op: impl FnOnce(&[f32], &mut [f32]) -> Result<()>,
) -> Result<()> {
    if input.is_null() {
        return Err(DspError::NullInputBuffer);
    }
    let len = sample_count(n)?;
    if output.is_null() {
        return Err(DspError::NullOutputBuffer);
    }

    if ptr::eq(input, output) {
        let copy = unsafe { slice::from_raw_parts(input, len) }.to_vec();
        op(&copy, unsafe { slice::from_raw_parts_mut(output, len) })
    } else {
        let input = unsafe { slice::from_raw_parts(input, len) };
        op(input, unsafe { slice::from_raw_parts_mut(output, len) })
    }
}

/// Resolves an output buffer and hands it to `op`.
///
/// # Safety
///
/// A non-null `output` must be valid for writes of `n` samples.
unsafe fn with_output(
    output: *mut f32,
    n: c_int,
    op: impl FnOnce(&mut [f32]) -> Result<()>,
) -> Result<()> {
    if output.is_null() {
        return Err(DspError::NullOutputBuffer);
    }
    let len = sample_count(n)?;
    op(unsafe { slice::from_raw_parts_mut(output, len) })
}

/// Writes the status of `result` to `error` and returns the value, or 0.0 on
/// failure. A null `error` slot returns 0.0 without converting.
///
/// # Safety
///
/// A non-null `error` must be valid for a write.
unsafe fn report(result: impl FnOnce() -> Result<f32>, error: *mut c_int) -> f32 {
    if error.is_null() {
        return 0.0;
    }
    let result = result();
    unsafe { error.write(status_code(&result)) };
    result.unwrap_or(0.0)
}

/// Amplitude to decibels. The status code is written to `error`.
///
/// # Safety
///
/// `error` must be null or valid for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ampTodB(amp: f32, error: *mut c_int) -> f32 {
    unsafe { report(|| amplitude::amplitude_to_decibels(amp), error) }
}

/// Decibels to amplitude, with 0 dB mapped to silence. The status code is
/// written to `error`.
///
/// # Safety
///
/// `error` must be null or valid for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dBToAmp(dB: f32, error: *mut c_int) -> f32 {
    unsafe { report(|| amplitude::decibels_to_amplitude(dB), error) }
}

/// # Safety
///
/// See the module documentation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_reverse(
    iAudioPtr: *const f32,
    iNumSamples: c_int,
    oAudioPtr: *mut f32,
) -> c_int {
    status_code(&unsafe { with_buffers(iAudioPtr, iNumSamples, oAudioPtr, transforms::reverse) })
}

/// # Safety
///
/// See the module documentation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_gainChange(
    iAudioPtr: *const f32,
    iNumSamples: c_int,
    oAudioPtr: *mut f32,
    dBChange: f32,
) -> c_int {
    status_code(&unsafe {
        with_buffers(iAudioPtr, iNumSamples, oAudioPtr, |input, output| {
            transforms::apply_gain(input, output, dBChange)
        })
    })
}

/// # Safety
///
/// See the module documentation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_normalize(
    iAudioPtr: *const f32,
    iNumSamples: c_int,
    oAudioPtr: *mut f32,
    dBThreshold: f32,
) -> c_int {
    status_code(&unsafe {
        with_buffers(iAudioPtr, iNumSamples, oAudioPtr, |input, output| {
            transforms::normalize(input, output, dBThreshold)
        })
    })
}

/// # Safety
///
/// See the module documentation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_fadeIn(
    iAudioPtr: *const f32,
    iNumSamples: c_int,
    oAudioPtr: *mut f32,
    durationInMS: c_int,
    sampleRate: c_int,
    fadeType: i16,
) -> c_int {
    status_code(&unsafe {
        with_buffers(iAudioPtr, iNumSamples, oAudioPtr, |input, output| {
            transforms::fade_in(
                input,
                output,
                non_negative("fade duration", durationInMS)?,
                non_negative("sample rate", sampleRate)?,
                FadeShape::try_from(fadeType)?,
            )
        })
    })
}

/// # Safety
///
/// See the module documentation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_fadeOut(
    iAudioPtr: *const f32,
    iNumSamples: c_int,
    oAudioPtr: *mut f32,
    durationInMS: c_int,
    sampleRate: c_int,
    fadeType: i16,
) -> c_int {
    status_code(&unsafe {
        with_buffers(iAudioPtr, iNumSamples, oAudioPtr, |input, output| {
            transforms::fade_out(
                input,
                output,
                non_negative("fade duration", durationInMS)?,
                non_negative("sample rate", sampleRate)?,
                FadeShape::try_from(fadeType)?,
            )
        })
    })
}

/// # Safety
///
/// `oAudioPtr` must be null or valid for writes of `nSamples` samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_simpleSinewave(
    oAudioPtr: *mut f32,
    nSamples: c_int,
    freq: f32,
    amp: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_output(oAudioPtr, nSamples, |output| {
            oscillators::generate_sine(output, freq, amp, non_negative("sample rate", sampleRate)?)
        })
    })
}

/// # Safety
///
/// `oAudioPtr` must be null or valid for writes of `nSamples` samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_simpleSquarewave(
    oAudioPtr: *mut f32,
    nSamples: c_int,
    freq: f32,
    amp: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_output(oAudioPtr, nSamples, |output| {
            oscillators::generate_square(output, freq, amp, non_negative("sample rate", sampleRate)?)
        })
    })
}

/// # Safety
///
/// `oAudioPtr` must be null or valid for writes of `nSamples` samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_simpleTrianglewave(
    oAudioPtr: *mut f32,
    nSamples: c_int,
    freq: f32,
    amp: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_output(oAudioPtr, nSamples, |output| {
            oscillators::generate_triangle(
                output,
                freq,
                amp,
                non_negative("sample rate", sampleRate)?,
            )
        })
    })
}

/// # Safety
///
/// `oAudioPtr` must be null or valid for writes of `nSamples` samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_rampSinewave(
    oAudioPtr: *mut f32,
    nSamples: c_int,
    startingFreq: f32,
    endingFreq: f32,
    gain_dB: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_output(oAudioPtr, nSamples, |output| {
            oscillators::generate_ramp_sine(
                output,
                startingFreq,
                endingFreq,
                gain_dB,
                non_negative("sample rate", sampleRate)?,
            )
        })
    })
}

/// # Safety
///
/// `oAudioPtr` must be null or valid for writes of `nSamples` samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_additiveSquarewave(
    oAudioPtr: *mut f32,
    nSamples: c_int,
    freq: f32,
    gain_dB: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_output(oAudioPtr, nSamples, |output| {
            oscillators::generate_additive_square(
                output,
                freq,
                gain_dB,
                non_negative("sample rate", sampleRate)?,
            )
        })
    })
}

/// # Safety
///
/// `oAudioPtr` must be null or valid for writes of `nSamples` samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dsp_additiveTrianglewave(
    oAudioPtr: *mut f32,
    nSamples: c_int,
    freq: f32,
    gain_dB: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_output(oAudioPtr, nSamples, |output| {
            oscillators::generate_additive_triangle(
                output,
                freq,
                gain_dB,
                non_negative("sample rate", sampleRate)?,
            )
        })
    })
}

/// # Safety
///
/// See the module documentation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dspa_tremolo(
    iAudioPtr: *const f32,
    iNumSamples: c_int,
    oAudioPtr: *mut f32,
    lfoStartRate: f32,
    lfoEndRate: f32,
    lfoDepth: f32,
    sampleRate: c_int,
) -> c_int {
    status_code(&unsafe {
        with_buffers(iAudioPtr, iNumSamples, oAudioPtr, |input, output| {
            effects::tremolo(
                input,
                output,
                lfoStartRate,
                lfoEndRate,
                lfoDepth,
                non_negative("sample rate", sampleRate)?,
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(3), Ok(3));
        assert!(sample_count(0).is_err());
        assert!(sample_count(-4).is_err());
    }

    #[test]
    fn test_null_error_slot() {
        assert_eq!(unsafe { ampTodB(0.5, ptr::null_mut()) }, 0.0);
        assert_eq!(unsafe { dBToAmp(-6.0, ptr::null_mut()) }, 0.0);
    }

    #[test]
    fn test_in_place() {
        let mut buffer = [1.0_f32, 2.0, 3.0];
        let ptr = buffer.as_mut_ptr();
        let code = unsafe { dsp_reverse(ptr, 3, ptr) };
        assert_eq!(code, 0);
        assert_eq!(buffer, [3.0, 2.0, 1.0]);
    }
}

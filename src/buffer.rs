//! Owned mono sample buffer for hosts.
//!
//! The operations in this crate only borrow slices. `SampleBuffer` is the
//! owning side: it holds one mono stream of `f32` samples, releases its memory
//! when dropped, and hands out `&[f32]` / `&mut [f32]` views through `Deref`.

use crate::amplitude::peak_amplitude;
use crate::error::{DspError, Result};
use std::ops::{Deref, DerefMut};

/// An owned, bounds-checked buffer of mono samples.
///
/// # Examples
///
/// ```
/// use monodsp::{SampleBuffer, reverse};
///
/// let input = SampleBuffer::from_vec(vec![0.1, 0.2, 0.3]);
/// let mut output = SampleBuffer::try_zeroed(input.len()).unwrap();
/// reverse(&input, &mut output).unwrap();
/// assert_eq!(&output[..], &[0.3, 0.2, 0.1]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleBuffer {
    samples: Vec<f32>,
}

impl SampleBuffer {
    /// Allocates a silent buffer of `len` samples.
    ///
    /// Allocation failure is reported as [`DspError::MemoryAllocationFailure`]
    /// instead of aborting the process.
    pub fn try_zeroed(len: usize) -> Result<Self> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| DspError::MemoryAllocationFailure(len))?;
        samples.resize(len, 0.0);
        Ok(Self { samples })
    }

    /// Wraps existing samples without copying.
    pub fn from_vec(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// Allocates a silent buffer with the same length as `self`.
    pub fn try_zeroed_like(&self) -> Result<Self> {
        Self::try_zeroed(self.samples.len())
    }

    /// Borrows the samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Borrows the samples mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Largest absolute sample value (0 for an empty buffer).
    pub fn peak(&self) -> f32 {
        peak_amplitude(&self.samples)
    }

    /// Unwraps the underlying vector.
    pub fn into_vec(self) -> Vec<f32> {
        self.samples
    }
}

impl Deref for SampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl DerefMut for SampleBuffer {
    fn deref_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }
}

impl From<Vec<f32>> for SampleBuffer {
    fn from(samples: Vec<f32>) -> Self {
        Self::from_vec(samples)
    }
}

impl From<SampleBuffer> for Vec<f32> {
    fn from(buffer: SampleBuffer) -> Self {
        buffer.into_vec()
    }
}

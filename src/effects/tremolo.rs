//! Tremolo effect (amplitude modulation) with a swept LFO rate.

use crate::error::{DspError, Result};
use crate::oscillators::Oscillator;
use crate::rate::SampleRate;
use crate::transforms::check_buffers;
use crate::Signal;
use std::f64::consts::{PI, TAU};
use tracing::{debug, trace};

/// Highest LFO rate in Hz the tremolo accepts.
pub const MAX_LFO_RATE: f32 = 20.0;

/// Highest modulation depth, in percent.
pub const MAX_DEPTH_PERCENT: f32 = 100.0;

/// A sine LFO whose rate moves linearly across a fixed number of samples.
///
/// The LFO starts at phase `3π/2` (its minimum), so a tremolo driven by it
/// begins at unity gain. The rate always moves by `|end - start| / length` per
/// sample, upwards, whichever endpoint is larger. Phase is accumulated in
/// `f64` without wrapping.
#[derive(Debug, Clone)]
pub struct SweptLfo {
    start_rate: f64,
    rate: f64,
    increment: f64,
    sample_rate: f64,
    phase: f64,
}

impl SweptLfo {
    /// Initial phase in radians.
    pub const START_PHASE: f64 = 3.0 * PI / 2.0;

    /// Creates an LFO sweeping from `start_rate` towards `end_rate` Hz over `length` samples.
    pub fn new(start_rate: f64, end_rate: f64, length: usize, sample_rate: SampleRate) -> Self {
        let increment = if length == 0 {
            0.0
        } else {
            ((end_rate - start_rate) / length as f64).abs()
        };
        Self {
            start_rate,
            rate: start_rate,
            increment,
            sample_rate: sample_rate.as_f64(),
            phase: Self::START_PHASE,
        }
    }

    /// LFO rate in Hz for the next sample.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Signal for SweptLfo {
    fn next_sample(&mut self) -> f64 {
        let value = self.phase.sin();
        self.rate += self.increment;
        self.phase += TAU * self.rate / self.sample_rate;
        value
    }
}

impl Oscillator for SweptLfo {
    fn frequency(&self) -> f64 {
        self.rate
    }

    fn reset(&mut self) {
        self.rate = self.start_rate;
        self.phase = Self::START_PHASE;
    }
}

/// Tremolo settings: LFO rate sweep and depth.
///
/// # Examples
///
/// ```
/// use monodsp::Tremolo;
///
/// let input = vec![0.5_f32; 44100];
/// let mut output = vec![0.0_f32; 44100];
/// Tremolo::new(2.0, 8.0, 50.0)
///     .process(&input, &mut output, 44100)
///     .unwrap();
/// assert_eq!(output[0], 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tremolo {
    /// LFO rate at the first sample, in Hz
    pub start_rate: f32,
    /// LFO rate at the last sample, in Hz
    pub end_rate: f32,
    /// Modulation depth in percent
    pub depth: f32,
}

impl Tremolo {
    /// Creates tremolo settings; nothing is checked until [`Tremolo::validate`].
    pub fn new(start_rate: f32, end_rate: f32, depth: f32) -> Self {
        Self {
            start_rate,
            end_rate,
            depth,
        }
    }

    /// Checks rates against `(0, 20]` Hz and depth against `[0, 100]` percent.
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [("start rate", self.start_rate), ("end rate", self.end_rate)] {
            if !(rate > 0.0 && rate <= MAX_LFO_RATE) {
                return Err(DspError::invalid(format!(
                    "LFO {name} {rate} Hz is outside (0, {MAX_LFO_RATE}]"
                )));
            }
        }
        if !(0.0..=MAX_DEPTH_PERCENT).contains(&self.depth) {
            return Err(DspError::invalid(format!(
                "LFO depth {}% is outside [0, {MAX_DEPTH_PERCENT}]",
                self.depth
            )));
        }
        Ok(())
    }

    /// Modulates `input` into `output`.
    ///
    /// Sample gain is `1 - depth * (0.5 * sin(phase) + 0.5)` with `depth` as a
    /// fraction, ranging from 1 down to `1 - depth`.
    ///
    /// # Errors
    ///
    /// [`DspError::InvalidParameter`] for bad buffers, out-of-range settings,
    /// or a sample rate other than 44100 or 48000.
    pub fn process(&self, input: &[f32], output: &mut [f32], sample_rate: u32) -> Result<()> {
        trace!(samples = input.len(), ?self, sample_rate, "tremolo");
        let rate = check_buffers(input, output)
            .and_then(|()| self.validate())
            .and_then(|()| SampleRate::for_tremolo(sample_rate))
            .inspect_err(|err| debug!(%err, "tremolo rejected"))?;

        let depth = self.depth as f64 / 100.0;
        let mut lfo = SweptLfo::new(
            self.start_rate as f64,
            self.end_rate as f64,
            input.len(),
            rate,
        );
        for (out, &sample) in output.iter_mut().zip(input) {
            let gain = 1.0 - depth * (0.5 * lfo.next_sample() + 0.5);
            *out = (gain * sample as f64) as f32;
        }
        Ok(())
    }
}

/// Applies a tremolo whose LFO rate sweeps from `lfo_start_rate` to
/// `lfo_end_rate` Hz across the buffer.
///
/// See [`Tremolo::process`].
pub fn tremolo(
    input: &[f32],
    output: &mut [f32],
    lfo_start_rate: f32,
    lfo_end_rate: f32,
    lfo_depth: f32,
    sample_rate: u32,
) -> Result<()> {
    Tremolo::new(lfo_start_rate, lfo_end_rate, lfo_depth).process(input, output, sample_rate)
}

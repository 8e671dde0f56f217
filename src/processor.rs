//! A configurable front end over every operation in the crate.

use crate::amplitude::{self, ZeroDbMapping};
use crate::effects;
use crate::envelopes::FadeShape;
use crate::error::Result;
use crate::oscillators;
use crate::transforms;

/// Settings shared by every call made through a [`SignalProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessorConfig {
    /// How exactly 0 dB turns into a linear factor
    pub zero_db_mapping: ZeroDbMapping,
}

/// Every operation in the crate, bound to one [`ProcessorConfig`].
///
/// The processor holds no state beyond its configuration. It is `Copy` and
/// can be shared freely between threads; calls on disjoint buffers never
/// interact.
///
/// # Examples
///
/// ```
/// use monodsp::{FadeShape, SignalProcessor};
///
/// let dsp = SignalProcessor::default();
/// let mut tone = vec![0.0_f32; 4800];
/// dsp.generate_sine(&mut tone, 440.0, 0.5, 48000).unwrap();
///
/// let mut faded = vec![0.0_f32; 4800];
/// dsp.fade_in(&tone, &mut faded, 10, 48000, FadeShape::EqualPower).unwrap();
///
/// let mut louder = vec![0.0_f32; 4800];
/// dsp.normalize(&faded, &mut louder, -1.0).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalProcessor {
    config: ProcessorConfig,
}

impl SignalProcessor {
    /// Creates a processor with the given settings.
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Settings this processor was built with.
    pub fn config(&self) -> ProcessorConfig {
        self.config
    }

    /// See [`amplitude::amplitude_to_decibels`].
    pub fn amplitude_to_decibels(&self, amp: f32) -> Result<f32> {
        amplitude::amplitude_to_decibels(amp)
    }

    /// Converts a level in decibels using the configured 0 dB mapping.
    pub fn decibels_to_amplitude(&self, db: f32) -> Result<f32> {
        amplitude::decibels_to_amplitude_with(db, self.config.zero_db_mapping)
    }

    /// See [`transforms::reverse`].
    pub fn reverse(&self, input: &[f32], output: &mut [f32]) -> Result<()> {
        transforms::reverse(input, output)
    }

    /// Changes gain by `db_change` using the configured 0 dB mapping.
    pub fn apply_gain(&self, input: &[f32], output: &mut [f32], db_change: f32) -> Result<()> {
        transforms::apply_gain_with(input, output, db_change, self.config.zero_db_mapping)
    }

    /// Normalizes to `threshold_db` using the configured 0 dB mapping.
    pub fn normalize(&self, input: &[f32], output: &mut [f32], threshold_db: f32) -> Result<()> {
        transforms::normalize_with(input, output, threshold_db, self.config.zero_db_mapping)
    }

    /// See [`transforms::fade_in`].
    pub fn fade_in(
        &self,
        input: &[f32],
        output: &mut [f32],
        duration_ms: u32,
        sample_rate: u32,
        shape: FadeShape,
    ) -> Result<()> {
        transforms::fade_in(input, output, duration_ms, sample_rate, shape)
    }

    /// See [`transforms::fade_out`].
    pub fn fade_out(
        &self,
        input: &[f32],
        output: &mut [f32],
        duration_ms: u32,
        sample_rate: u32,
        shape: FadeShape,
    ) -> Result<()> {
        transforms::fade_out(input, output, duration_ms, sample_rate, shape)
    }

    /// See [`oscillators::generate_sine`].
    pub fn generate_sine(
        &self,
        output: &mut [f32],
        freq: f32,
        amp: f32,
        sample_rate: u32,
    ) -> Result<()> {
        oscillators::generate_sine(output, freq, amp, sample_rate)
    }

    /// See [`oscillators::generate_square`].
    pub fn generate_square(
        &self,
        output: &mut [f32],
        freq: f32,
        amp: f32,
        sample_rate: u32,
    ) -> Result<()> {
        oscillators::generate_square(output, freq, amp, sample_rate)
    }

    /// See [`oscillators::generate_triangle`].
    pub fn generate_triangle(
        &self,
        output: &mut [f32],
        freq: f32,
        amp: f32,
        sample_rate: u32,
    ) -> Result<()> {
        oscillators::generate_triangle(output, freq, amp, sample_rate)
    }

    /// See [`oscillators::generate_ramp_sine`].
    pub fn generate_ramp_sine(
        &self,
        output: &mut [f32],
        start_freq: f32,
        end_freq: f32,
        gain_db: f32,
        sample_rate: u32,
    ) -> Result<()> {
        oscillators::generate_ramp_sine(output, start_freq, end_freq, gain_db, sample_rate)
    }

    /// See [`oscillators::generate_additive_square`].
    pub fn generate_additive_square(
        &self,
        output: &mut [f32],
        freq: f32,
        gain_db: f32,
        sample_rate: u32,
    ) -> Result<()> {
        oscillators::generate_additive_square(output, freq, gain_db, sample_rate)
    }

    /// See [`oscillators::generate_additive_triangle`].
    pub fn generate_additive_triangle(
        &self,
        output: &mut [f32],
        freq: f32,
        gain_db: f32,
        sample_rate: u32,
    ) -> Result<()> {
        oscillators::generate_additive_triangle(output, freq, gain_db, sample_rate)
    }

    /// See [`effects::tremolo`].
    pub fn tremolo(
        &self,
        input: &[f32],
        output: &mut [f32],
        lfo_start_rate: f32,
        lfo_end_rate: f32,
        lfo_depth: f32,
        sample_rate: u32,
    ) -> Result<()> {
        effects::tremolo(
            input,
            output,
            lfo_start_rate,
            lfo_end_rate,
            lfo_depth,
            sample_rate,
        )
    }
}

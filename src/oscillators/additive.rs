//! Band-limited waveforms built from sums of harmonics.

use super::{Oscillator, check_output, check_positive, gain_to_amplitude};
use crate::error::Result;
use crate::rate::SampleRate;
use crate::Signal;
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// Highest odd harmonic included in either series.
const HIGHEST_HARMONIC: u32 = 99;

/// Which harmonic weighting an [`AdditiveOscillator`] uses.
///
/// Both series sum the odd harmonics `1, 3, 5, ..., 99` of the fundamental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonicSeries {
    /// Harmonic `h` weighted by `1/h`
    Square,
    /// Harmonic `h` weighted by `1/h²`
    Triangle,
}

impl HarmonicSeries {
    /// Weight of harmonic number `h`.
    pub fn weight(self, h: u32) -> f64 {
        let n = h as f64;
        match self {
            HarmonicSeries::Square => 1.0 / n,
            HarmonicSeries::Triangle => 1.0 / (n * n),
        }
    }

    /// Harmonic numbers that make up the series.
    pub fn harmonics(self) -> impl Iterator<Item = u32> {
        (1..=HIGHEST_HARMONIC).step_by(2)
    }
}

/// An additive oscillator summing a fixed set of sine partials.
///
/// The fundamental phase is accumulated in `f64` and wrapped into `[0, 2π)`;
/// harmonic `h` contributes `weight(h) * sin(h * phase)`.
///
/// # Examples
///
/// ```
/// use monodsp::{AdditiveOscillator, SampleRate, Signal};
///
/// let mut osc = AdditiveOscillator::square(110.0, -6.0, SampleRate::Hz48000);
/// let mut buffer = vec![0.0_f32; 480];
/// osc.process(&mut buffer);
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveOscillator {
    series: HarmonicSeries,
    frequency: f64,
    amplitude: f64,
    phase: f64,
    phase_increment: f64,
}

impl AdditiveOscillator {
    /// Creates an oscillator for `series` at a linear `amplitude`.
    pub fn new(
        series: HarmonicSeries,
        frequency: f64,
        amplitude: f64,
        sample_rate: SampleRate,
    ) -> Self {
        Self {
            series,
            frequency,
            amplitude,
            phase: 0.0,
            phase_increment: TAU * frequency / sample_rate.as_f64(),
        }
    }

    /// Square-series oscillator at a gain in decibels.
    pub fn square(frequency: f64, gain_db: f64, sample_rate: SampleRate) -> Self {
        Self::new(
            HarmonicSeries::Square,
            frequency,
            10.0_f64.powf(gain_db / 20.0),
            sample_rate,
        )
    }

    /// Triangle-series oscillator at a gain in decibels.
    pub fn triangle(frequency: f64, gain_db: f64, sample_rate: SampleRate) -> Self {
        Self::new(
            HarmonicSeries::Triangle,
            frequency,
            10.0_f64.powf(gain_db / 20.0),
            sample_rate,
        )
    }

    /// Harmonic weighting in use.
    pub fn series(&self) -> HarmonicSeries {
        self.series
    }
}

impl Signal for AdditiveOscillator {
    fn next_sample(&mut self) -> f64 {
        let sum: f64 = self
            .series
            .harmonics()
            .map(|h| self.series.weight(h) * (h as f64 * self.phase).sin())
            .sum();

        self.phase = (self.phase + self.phase_increment).rem_euclid(TAU);
        self.amplitude * sum
    }
}

impl Oscillator for AdditiveOscillator {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// Fills `output` with a band-limited square approximation.
///
/// # Errors
///
/// [`DspError::InvalidParameter`](crate::DspError::InvalidParameter) for an
/// empty buffer, an unsupported sample rate, a frequency that is not strictly
/// positive, or a non-finite gain.
pub fn generate_additive_square(
    output: &mut [f32],
    freq: f32,
    gain_db: f32,
    sample_rate: u32,
) -> Result<()> {
    generate_additive(output, HarmonicSeries::Square, freq, gain_db, sample_rate)
}

/// Fills `output` with a band-limited triangle approximation.
///
/// # Errors
///
/// Same conditions as [`generate_additive_square`].
pub fn generate_additive_triangle(
    output: &mut [f32],
    freq: f32,
    gain_db: f32,
    sample_rate: u32,
) -> Result<()> {
    generate_additive(output, HarmonicSeries::Triangle, freq, gain_db, sample_rate)
}

fn generate_additive(
    output: &mut [f32],
    series: HarmonicSeries,
    freq: f32,
    gain_db: f32,
    sample_rate: u32,
) -> Result<()> {
    trace!(
        samples = output.len(),
        ?series,
        freq,
        gain_db,
        sample_rate,
        "generate_additive"
    );
    let (rate, amplitude) = check_output(output, sample_rate)
        .and_then(|rate| {
            check_positive("frequency", freq)?;
            Ok((rate, gain_to_amplitude(gain_db)?))
        })
        .inspect_err(|err| debug!(%err, ?series, "generate_additive rejected"))?;

    AdditiveOscillator::new(series, freq as f64, amplitude, rate).process(output);
    Ok(())
}

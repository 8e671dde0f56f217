//! Monodsp - offline signal processing for mono `f32` buffers
//!
//! This library converts between amplitude and decibels, transforms buffers
//! (reverse, gain, normalize, fades), generates test waveforms and applies a
//! tremolo with a swept LFO rate.
//!
//! Every operation borrows caller-owned slices, validates all of its
//! parameters before writing, and reports failures through [`DspError`].
//! Operations keep no state between calls.
//!
//! ```
//! use monodsp::{FadeShape, apply_gain, fade_out, generate_sine};
//!
//! let mut tone = vec![0.0_f32; 48000];
//! generate_sine(&mut tone, 440.0, 1.0, 48000).unwrap();
//!
//! let mut quieter = vec![0.0_f32; 48000];
//! apply_gain(&tone, &mut quieter, -6.0).unwrap();
//!
//! let mut faded = vec![0.0_f32; 48000];
//! fade_out(&quieter, &mut faded, 500, 48000, FadeShape::SShape).unwrap();
//! ```
//!
//! Enable the `capi` feature for `extern "C"` entry points taking raw
//! pointer/length pairs.

pub mod amplitude;
pub mod buffer;
pub mod effects;
pub mod envelopes;
pub mod error;
pub mod oscillators;
pub mod processor;
pub mod rate;
pub mod signal;
pub mod transforms;

#[cfg(feature = "capi")]
pub mod capi;

// Re-export commonly used types at the crate root
pub use amplitude::{
    ZeroDbMapping, amplitude_to_decibels, decibels_to_amplitude, decibels_to_amplitude_with,
    gain_factor, peak_amplitude,
};
pub use buffer::SampleBuffer;
pub use effects::{SweptLfo, Tremolo, tremolo};
pub use envelopes::FadeShape;
pub use error::{DspError, Result, status_code};
pub use oscillators::{
    AdditiveOscillator, HarmonicSeries, Oscillator, SineOscillator, SquareOscillator, SweptSine,
    TriangleOscillator, generate_additive_square, generate_additive_triangle, generate_ramp_sine,
    generate_sine, generate_square, generate_triangle,
};
pub use processor::{ProcessorConfig, SignalProcessor};
pub use rate::SampleRate;
pub use signal::Signal;
pub use transforms::{
    apply_gain, apply_gain_with, fade_in, fade_out, normalize, normalize_with, reverse,
};

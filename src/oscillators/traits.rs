//! Core trait definitions for oscillators.

use crate::Signal;

/// Common interface for all oscillators.
///
/// Every oscillator starts at sample index 0 and can be rewound there.
pub trait Oscillator: Signal {
    /// Instantaneous frequency in Hz.
    ///
    /// For swept oscillators this is the frequency of the next sample.
    fn frequency(&self) -> f64;

    /// Resets the oscillator to its initial state.
    fn reset(&mut self);
}

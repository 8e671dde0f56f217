//! Modulation effects.
//!
//! Effects read an input buffer and write a modulated copy into an output
//! buffer of the same length.

mod tremolo;

pub use tremolo::{MAX_DEPTH_PERCENT, MAX_LFO_RATE, SweptLfo, Tremolo, tremolo};

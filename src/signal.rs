//! Core signal generation trait.
//!
//! This module provides the `Signal` trait shared by every generator and LFO
//! in the crate.

/// Common interface for anything that produces samples one at a time.
///
/// Generators compute in `f64` and the buffers they fill hold `f32`, so the
/// narrowing happens once per sample in [`Signal::process`].
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample() as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl Signal for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_default_process_is_sequential() {
        let mut counter = Counter(0.0);
        let mut buffer = [0.0_f32; 4];
        counter.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }
}

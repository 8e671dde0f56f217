//! Transforms and tremolo applied to seeded white-noise buffers.

use monodsp::{
    FadeShape, SampleBuffer, SignalProcessor, amplitude_to_decibels, apply_gain, peak_amplitude,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;

fn white_noise(seed: u64, len: usize, level: f32) -> SampleBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(-level..=level))
        .collect::<Vec<f32>>()
        .into()
}

#[test]
fn test_normalize_noise() {
    let noise = white_noise(7, 48000, 0.3);
    let mut out = SampleBuffer::try_zeroed(noise.len()).unwrap();

    SignalProcessor::default()
        .normalize(&noise, &mut out, -1.0)
        .unwrap();

    let peak_db = amplitude_to_decibels(out.peak()).unwrap();
    assert!((peak_db + 1.0).abs() < 1e-3, "{peak_db}");
}

#[test]
fn test_gain_round_trip() {
    let noise = white_noise(11, 4096, 0.5);
    let mut down = noise.try_zeroed_like().unwrap();
    let mut up = noise.try_zeroed_like().unwrap();

    apply_gain(&noise, &mut down, -12.0).unwrap();
    apply_gain(&down, &mut up, 12.0).unwrap();

    for (a, b) in up.iter().zip(noise.iter()) {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn test_fade_out_then_reverse() {
    let dsp = SignalProcessor::default();
    let noise = white_noise(3, 44100, 1.0);
    let mut faded = noise.try_zeroed_like().unwrap();
    let mut reversed = noise.try_zeroed_like().unwrap();

    // 100 ms fade out: everything after sample 4410 is silent
    dsp.fade_out(&noise, &mut faded, 100, 44100, FadeShape::EqualPower)
        .unwrap();
    dsp.reverse(&faded, &mut reversed).unwrap();

    assert!(reversed[..44100 - 4410].iter().all(|&s| s == 0.0));
    assert_eq!(reversed[44099], noise[0]);
}

#[test]
fn test_tremolo_on_noise() {
    let noise = white_noise(42, 48000, 0.8);
    let mut out = noise.try_zeroed_like().unwrap();

    SignalProcessor::default()
        .tremolo(&noise, &mut out, 4.0, 8.0, 60.0, 48000)
        .unwrap();

    assert!(out.iter().all(|s| s.is_finite()));
    assert!(peak_amplitude(&out) <= noise.peak());
    // at 60% depth no sample is attenuated below 40%
    for (o, n) in out.iter().zip(noise.iter()) {
        assert!(o.abs() >= 0.4 * n.abs() - 1e-6);
    }
}

#[test]
fn test_concurrent_calls_on_disjoint_buffers() {
    let dsp = SignalProcessor::default();
    let noise = white_noise(99, 8 * 4096, 0.5);

    let mut sequential = noise.try_zeroed_like().unwrap();
    for (input, output) in noise.chunks(4096).zip(sequential.chunks_mut(4096)) {
        dsp.tremolo(input, output, 2.0, 12.0, 75.0, 44100).unwrap();
    }

    let mut parallel = noise.try_zeroed_like().unwrap();
    thread::scope(|scope| {
        let handles: Vec<_> = noise
            .chunks(4096)
            .zip(parallel.chunks_mut(4096))
            .map(|(input, output)| {
                scope.spawn(move || dsp.tremolo(input, output, 2.0, 12.0, 75.0, 44100))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }
    });

    assert_eq!(parallel, sequential);
}

//! Renders every generator and a processing chain to 24-bit mono WAV files.
//!
//! Usage: `cargo run --example render_tones [output-dir]`
//!
//! Set `RUST_LOG=monodsp=trace` to see each operation as it runs.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use monodsp::{FadeShape, SampleBuffer, SignalProcessor};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: u32 = 44100;
const SECONDS: usize = 2;

/// Largest 24-bit sample value.
const FULL_SCALE_24: f32 = 8_388_607.0;

fn write_wav(path: &Path, samples: &[f32]) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 24,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for &sample in samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * FULL_SCALE_24) as i32)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize {}", path.display()))?;
    info!(path = %path.display(), samples = samples.len(), "wrote");
    Ok(())
}

fn render(
    dir: &Path,
    name: &str,
    generate: impl FnOnce(&mut [f32]) -> monodsp::Result<()>,
) -> Result<SampleBuffer> {
    let mut buffer = SampleBuffer::try_zeroed(SAMPLE_RATE as usize * SECONDS)?;
    generate(buffer.as_mut_slice()).with_context(|| format!("Failed to render {name}"))?;
    write_wav(&dir.join(format!("{name}.wav")), &buffer)?;
    Ok(buffer)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("render_tones=info,monodsp=info")),
        )
        .init();

    let dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/tones"));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let dsp = SignalProcessor::default();

    let sine = render(&dir, "sine", |out| {
        dsp.generate_sine(out, 440.0, 0.8, SAMPLE_RATE)
    })?;
    render(&dir, "square", |out| {
        dsp.generate_square(out, 220.0, 0.3, SAMPLE_RATE)
    })?;
    render(&dir, "triangle", |out| {
        dsp.generate_triangle(out, 330.0, 0.6, SAMPLE_RATE)
    })?;
    render(&dir, "ramp_sine", |out| {
        dsp.generate_ramp_sine(out, 100.0, 4000.0, -6.0, SAMPLE_RATE)
    })?;
    render(&dir, "additive_square", |out| {
        dsp.generate_additive_square(out, 110.0, -6.0, SAMPLE_RATE)
    })?;
    render(&dir, "additive_triangle", |out| {
        dsp.generate_additive_triangle(out, 110.0, -3.0, SAMPLE_RATE)
    })?;

    // Host-style chain: each step reads the previous buffer into a new one
    let mut faded = sine.try_zeroed_like()?;
    dsp.fade_in(&sine, &mut faded, 250, SAMPLE_RATE, FadeShape::EqualPower)
        .context("fade in")?;
    let mut quiet = sine.try_zeroed_like()?;
    dsp.apply_gain(&faded, &mut quiet, -18.0)
        .context("gain change")?;
    let mut normalized = sine.try_zeroed_like()?;
    dsp.normalize(&quiet, &mut normalized, -1.0)
        .context("normalize")?;
    let mut modulated = sine.try_zeroed_like()?;
    dsp.tremolo(&normalized, &mut modulated, 4.0, 8.0, 60.0, SAMPLE_RATE)
        .context("tremolo")?;
    let mut reversed = sine.try_zeroed_like()?;
    dsp.reverse(&modulated, &mut reversed).context("reverse")?;

    write_wav(&dir.join("chain.wav"), &reversed)?;
    info!(peak = reversed.peak(), "chain rendered");
    Ok(())
}

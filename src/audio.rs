//! Audio input types for the transcription adapters.
//!
//! The adapters accept either a file path or an in-memory buffer of mono
//! f32 samples at 16kHz. Resampling and channel mixdown happen upstream;
//! per the adapter contract, sample rate and channel count are not
//! validated here.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Sample rate the speech models expect.
pub const SAMPLE_RATE: u32 = 16_000;

/// Samples in one 30-second model frame (Whisper's fixed input window).
pub const FRAME_SAMPLES: usize = 30 * SAMPLE_RATE as usize;

/// One unit of audio handed to a transcription adapter.
#[derive(Debug, Clone)]
pub enum AudioInput {
    /// Path to an audio file on disk (WAV).
    Path(PathBuf),
    /// Mono f32 samples at 16kHz.
    Samples(Vec<f32>),
}

impl From<PathBuf> for AudioInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for AudioInput {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<f32>> for AudioInput {
    fn from(samples: Vec<f32>) -> Self {
        Self::Samples(samples)
    }
}

impl From<&[f32]> for AudioInput {
    fn from(samples: &[f32]) -> Self {
        Self::Samples(samples.to_vec())
    }
}

/// Pad with silence or truncate so the buffer is exactly `len` samples.
pub fn pad_or_trim(mut samples: Vec<f32>, len: usize) -> Vec<f32> {
    samples.resize(len, 0.0);
    samples
}

/// Read a WAV file into interleaved f32 samples.
///
/// Handles 16-bit integer and 32-bit float WAV. The samples come back
/// exactly as stored; no resampling, no channel mixdown.
pub fn read_wav(path: &Path) -> Result<Vec<f32>> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to decode float samples: {}", path.display()))?,
        hound::SampleFormat::Int => reader
            .into_samples::<i16>()
            .map(|s| s.map(|s| f32::from(s) / f32::from(i16::MAX)))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to decode integer samples: {}", path.display()))?,
    };

    Ok(samples)
}

#[cfg(test)]
#[path = "audio_test.rs"]
mod tests;

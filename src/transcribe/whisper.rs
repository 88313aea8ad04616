//! whisper.cpp backend via whisper-rs.

use super::SpeechModel;
use crate::audio::{self, AudioInput, FRAME_SAMPLES, SAMPLE_RATE};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

/// Speech model backed by a whisper.cpp GGML checkpoint.
///
/// The underlying WhisperContext is leaked intentionally - the model stays
/// loaded for the process lifetime. This avoids a self-referential struct
/// while letting the decoder state be reused across transcriptions.
#[derive(Debug)]
pub struct WhisperModel {
    state: WhisperState,
    language: Option<String>,
}

impl WhisperModel {
    /// Load a GGML checkpoint from disk.
    ///
    /// Nothing is caught at this layer: a missing or corrupt checkpoint
    /// propagates as an error, which callers should treat as fatal.
    ///
    /// # Arguments
    /// * `model_path` - Path to the Whisper GGML model file
    /// * `language` - Language code (e.g., "en", "de") or None for auto-detect
    pub fn load(model_path: impl AsRef<Path>, language: Option<String>) -> Result<Self> {
        let path = model_path.as_ref();
        info!(
            path = %path.display(),
            language = ?language,
            "Loading Whisper model"
        );

        if !path.exists() {
            anyhow::bail!("Model checkpoint not found at {}", path.display());
        }

        let ctx = WhisperContext::new_with_params(
            path.to_str().context("Model path is not valid UTF-8")?,
            WhisperContextParameters::default(),
        )
        .context("Failed to load Whisper model")?;

        // Box and leak the context to get a 'static reference; the model
        // lives as long as the process.
        let ctx: &'static WhisperContext = Box::leak(Box::new(ctx));

        let state = ctx
            .create_state()
            .context("Failed to create Whisper state")?;

        info!("Whisper model and state loaded");

        Ok(Self { state, language })
    }

    /// Get the configured language.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn run(&mut self, samples: &[f32]) -> Result<String> {
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(self.language.as_deref());

        // Keep whisper.cpp off stdout; its logs are routed through tracing
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        self.state
            .full(params, samples)
            .context("Whisper inference failed")?;

        let num_segments = self.state.full_n_segments();
        let mut result = String::new();

        for i in 0..num_segments {
            if let Some(segment) = self.state.get_segment(i) {
                if let Ok(text) = segment.to_str_lossy() {
                    result.push_str(&text);
                }
            }
        }

        debug!(text_len = result.len(), "Decoding complete");

        Ok(result.trim().to_string())
    }
}

impl SpeechModel for WhisperModel {
    fn transcribe(&mut self, audio: &AudioInput, fp16: bool) -> Result<String> {
        // GGML checkpoints bake weight precision into the file; the flag is
        // accepted for contract compatibility and recorded in the log.
        debug!(fp16, "Transcribe requested");

        let samples = match audio {
            AudioInput::Path(path) => audio::read_wav(path)?,
            AudioInput::Samples(samples) => samples.clone(),
        };

        debug!(
            samples = samples.len(),
            duration_secs = samples.len() as f32 / SAMPLE_RATE as f32,
            "Running inference"
        );

        self.run(&samples)
    }

    fn decode_raw(&mut self, samples: &[f32]) -> Result<String> {
        // Whisper decodes a fixed 30-second window; pad with silence or
        // truncate to exactly one frame.
        let framed = audio::pad_or_trim(samples.to_vec(), FRAME_SAMPLES);
        self.run(&framed)
    }
}

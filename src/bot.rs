//! Voice-bot transcription adapter.
//!
//! The bot's voice pipeline loads a model once at startup and then calls
//! `transcribe` per utterance. Per-call failures never reach the bot: one
//! bad utterance yields an empty transcript and a log line, and the bot
//! keeps serving.

use crate::audio::AudioInput;
use crate::config::Config;
use crate::error::TranscribeError;
use crate::transcribe::{SpeechModel, WhisperModel};
use anyhow::Result;
use std::path::Path;
use tracing::{error, warn};

/// Adapter returning raw model text (casing and punctuation preserved).
///
/// Owns the model slot: `load_model` fills or replaces it and every
/// `transcribe` call reads it. No internal locking - `&mut self` leaves
/// serialization of concurrent access to the caller.
#[derive(Default)]
pub struct BotTranscriber {
    model: Option<Box<dyn SpeechModel>>,
}

impl BotTranscriber {
    /// Create an adapter with no model loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter around an already-loaded model.
    pub fn with_model(model: Box<dyn SpeechModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Load the model described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let model = WhisperModel::load(&config.model.path, config.model.language_hint())?;
        Ok(Self::with_model(Box::new(model)))
    }

    /// Load a Whisper checkpoint, replacing any previously loaded model.
    ///
    /// Load failures propagate: a missing or corrupt checkpoint is a fatal
    /// startup error, unlike per-call inference failures.
    pub fn load_model(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let model = WhisperModel::load(path, None)?;
        self.model = Some(Box::new(model));
        Ok(())
    }

    /// Whether a model is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Transcribe one audio unit, surfacing the failure mode.
    pub fn try_transcribe(
        &mut self,
        audio: &AudioInput,
        fp16: bool,
    ) -> Result<String, TranscribeError> {
        let model = self
            .model
            .as_mut()
            .ok_or(TranscribeError::ModelNotLoaded)?;
        model
            .transcribe(audio, fp16)
            .map_err(TranscribeError::Inference)
    }

    /// Transcribe one audio unit, swallowing failures.
    ///
    /// Returns the raw model text, or `""` when no model is loaded or
    /// inference fails. The cause only shows up in the logs.
    pub fn transcribe(&mut self, audio: &AudioInput, fp16: bool) -> String {
        match self.try_transcribe(audio, fp16) {
            Ok(text) => text,
            Err(TranscribeError::ModelNotLoaded) => {
                warn!("Transcription requested before load_model(); returning empty text");
                String::new()
            }
            Err(e) => {
                error!(error = %e, "Transcription failed; returning empty text");
                String::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "bot_test.rs"]
mod tests;

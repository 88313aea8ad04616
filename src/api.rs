//! Cloud-API-shaped transcription adapter.
//!
//! Wraps transcripts in the response envelope of a hosted speech API so
//! existing response-parsing code keeps working against local inference:
//!
//! ```json
//! {"channel":{"alternatives":[{"transcript":"<cleaned text>"}]}}
//! ```
//!
//! Transcripts are normalized (lowercase, punctuation stripped) before
//! wrapping. A call never fails: on any error the same envelope carries an
//! empty transcript.

use crate::audio::AudioInput;
use crate::config::Config;
use crate::error::TranscribeError;
use crate::text::clean_transcript;
use crate::transcribe::{SpeechModel, WhisperModel};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, warn};

/// Last-resort literal for the envelope; serialization of the response
/// structs cannot realistically fail, but callers are promised well-formed
/// JSON unconditionally.
const EMPTY_RESPONSE: &str = r#"{"channel":{"alternatives":[{"transcript":""}]}}"#;

/// Response envelope. One channel, one alternative, always.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub channel: Channel,
}

/// The single recognition channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub alternatives: Vec<Alternative>,
}

/// One recognition hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub transcript: String,
}

impl TranscriptResponse {
    /// Wrap a transcript in the fixed envelope.
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            channel: Channel {
                alternatives: vec![Alternative {
                    transcript: transcript.into(),
                }],
            },
        }
    }

    /// The envelope with an empty transcript.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Serialize to a JSON string. Never produces malformed output.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| EMPTY_RESPONSE.to_string())
    }
}

/// Adapter returning cleaned transcripts in the fixed JSON envelope.
///
/// Same model-slot shape as [`crate::bot::BotTranscriber`]: load once,
/// transcribe many, no internal locking.
#[derive(Default)]
pub struct ApiTranscriber {
    model: Option<Box<dyn SpeechModel>>,
}

impl ApiTranscriber {
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
    /// Load failures propagate; everything after this point is fail-soft.
    pub fn load_model(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let model = WhisperModel::load(path, None)?;
        self.model = Some(Box::new(model));
        Ok(())
    }

    /// Whether a model is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Transcribe an audio file, returning the cleaned transcript text.
    pub fn try_transcribe(&mut self, audio: impl AsRef<Path>) -> Result<String, TranscribeError> {
        let model = self
            .model
            .as_mut()
            .ok_or(TranscribeError::ModelNotLoaded)?;
        let input = AudioInput::Path(audio.as_ref().to_path_buf());
        let raw = model
            .transcribe(&input, false)
            .map_err(TranscribeError::Inference)?;
        Ok(clean_transcript(&raw))
    }

    /// Decode an in-memory buffer of mono f32 16kHz samples, returning the
    /// cleaned transcript text.
    pub fn try_transcribe_raw(&mut self, samples: &[f32]) -> Result<String, TranscribeError> {
        let model = self
            .model
            .as_mut()
            .ok_or(TranscribeError::ModelNotLoaded)?;
        let raw = model
            .decode_raw(samples)
            .map_err(TranscribeError::Inference)?;
        Ok(clean_transcript(&raw))
    }

    /// Transcribe an audio file into the JSON envelope.
    ///
    /// Always returns well-formed JSON; on failure the transcript field is
    /// empty and the cause goes to the log.
    pub fn transcribe(&mut self, audio: impl AsRef<Path>) -> String {
        respond(self.try_transcribe(audio))
    }

    /// Decode an in-memory sample buffer into the JSON envelope.
    ///
    /// Same fail-soft contract as [`Self::transcribe`].
    pub fn transcribe_raw(&mut self, samples: &[f32]) -> String {
        respond(self.try_transcribe_raw(samples))
    }
}

/// Fold a transcription result into the fail-soft JSON contract.
fn respond(result: Result<String, TranscribeError>) -> String {
    match result {
        Ok(text) => TranscriptResponse::new(text).to_json(),
        Err(TranscribeError::ModelNotLoaded) => {
            warn!("Transcription requested before load_model(); returning empty transcript");
            TranscriptResponse::empty().to_json()
        }
        Err(e) => {
            error!(error = %e, "Transcription failed; returning empty transcript");
            TranscriptResponse::empty().to_json()
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

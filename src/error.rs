//! Error taxonomy for the transcription adapters.

use thiserror::Error;

/// Why a single transcription call failed.
///
/// Only the `try_` adapter methods return these; the plain `transcribe`
/// entry points absorb them into an empty result after logging.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// `transcribe` was called before `load_model`.
    #[error("no model loaded; call load_model() first")]
    ModelNotLoaded,

    /// Reading the audio or running the model failed.
    #[error("inference failed: {0:#}")]
    Inference(anyhow::Error),
}

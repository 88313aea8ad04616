//! Speech-to-text inference backends.
//!
//! This module provides a trait abstraction for the underlying inference
//! library and the whisper.cpp implementation of it.

use anyhow::Result;

use crate::audio::AudioInput;

mod whisper;

pub use whisper::WhisperModel;

/// A loaded speech recognition model.
///
/// Calls are blocking and synchronous; apart from internal decoder scratch
/// space each call is stateless. `&mut self` leaves serialization of
/// concurrent access to the caller.
pub trait SpeechModel: Send {
    /// Transcribe an audio input to raw text.
    ///
    /// # Arguments
    /// * `audio` - File path or mono f32 16kHz samples
    /// * `fp16` - Request reduced-precision inference where the backend
    ///   supports it
    fn transcribe(&mut self, audio: &AudioInput, fp16: bool) -> Result<String>;

    /// Decode a raw buffer of mono f32 16kHz samples.
    ///
    /// Pads or trims to the model frame length, then runs single-pass
    /// greedy decoding with fp16 disabled.
    fn decode_raw(&mut self, samples: &[f32]) -> Result<String>;
}

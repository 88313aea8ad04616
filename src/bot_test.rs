use super::*;
use crate::transcribe::stub::{FailingModel, FixedModel};

#[test]
fn test_new_adapter_has_no_model() {
    let bot = BotTranscriber::new();
    assert!(!bot.is_loaded());
}

#[test]
fn test_unset_model_returns_empty_string() {
    let mut bot = BotTranscriber::new();

    let from_path = bot.transcribe(&AudioInput::Path("speech.wav".into()), false);
    assert_eq!(from_path, "");

    let from_samples = bot.transcribe(&AudioInput::Samples(vec![0.0; 1600]), false);
    assert_eq!(from_samples, "");
}

#[test]
fn test_try_transcribe_without_model_is_model_not_loaded() {
    let mut bot = BotTranscriber::new();
    let err = bot
        .try_transcribe(&AudioInput::Samples(vec![0.0; 16]), false)
        .unwrap_err();
    assert!(matches!(err, TranscribeError::ModelNotLoaded));
}

#[test]
fn test_inference_failure_returns_empty_string() {
    let mut bot = BotTranscriber::with_model(Box::new(FailingModel));
    let text = bot.transcribe(&AudioInput::Samples(vec![0.1; 1600]), false);
    assert_eq!(text, "");
}

#[test]
fn test_try_transcribe_surfaces_inference_error() {
    let mut bot = BotTranscriber::with_model(Box::new(FailingModel));
    let err = bot
        .try_transcribe(&AudioInput::Samples(vec![0.1; 1600]), false)
        .unwrap_err();
    assert!(matches!(err, TranscribeError::Inference(_)));
    assert!(err.to_string().contains("decoder exploded"));
}

#[test]
fn test_output_is_raw_model_text() {
    // Module 1 applies no cleaning: casing and punctuation pass through.
    let mut bot = BotTranscriber::with_model(Box::new(FixedModel::new("Hello, World! 123")));
    let text = bot.transcribe(&AudioInput::Samples(vec![0.1; 1600]), false);
    assert_eq!(text, "Hello, World! 123");
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let mut bot = BotTranscriber::with_model(Box::new(FixedModel::new("same every time")));
    let input = AudioInput::Samples(vec![0.2; 1600]);

    let first = bot.transcribe(&input, false);
    let second = bot.transcribe(&input, false);

    assert_eq!(first, "same every time");
    assert_eq!(first, second);
}

#[test]
fn test_fp16_flag_reaches_the_model() {
    // The flag is forwarded untouched; the stub accepts either value.
    let mut bot = BotTranscriber::with_model(Box::new(FixedModel::new("ok")));
    assert_eq!(bot.transcribe(&AudioInput::Samples(vec![0.0; 16]), true), "ok");
}

#[test]
fn test_load_model_failure_propagates() {
    let mut bot = BotTranscriber::new();
    let result = bot.load_model("/nonexistent/ggml-tiny.bin");
    assert!(result.is_err());
    assert!(!bot.is_loaded());
}

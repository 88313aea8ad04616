//! Thin adapters over whisper.cpp inference.
//!
//! Two surfaces wrap the same underlying model:
//!
//! - [`bot::BotTranscriber`] returns raw model text for a voice bot. A call
//!   never fails: with no model loaded or on an inference error it logs the
//!   cause and returns an empty string.
//! - [`api::ApiTranscriber`] returns a JSON string shaped like a hosted
//!   speech API response, with the transcript lowercased and stripped of
//!   punctuation. On any failure the same JSON shape carries an empty
//!   transcript, so callers can always parse the result.
//!
//! Loading a model is the one fail-hard operation; treat a `load_model`
//! error as fatal at startup.

pub mod api;
pub mod audio;
pub mod bot;
pub mod config;
pub mod error;
pub mod text;
pub mod transcribe;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Application-specific environment variable for log filtering (overrides config).
const LOG_ENV_VAR: &str = "WHISPER_BRIDGE_LOG";

/// Install a tracing subscriber filtered per the config log level.
///
/// `WHISPER_BRIDGE_LOG` overrides the config file level. A no-op if the host
/// application already installed a subscriber.
pub fn init_logging(config: &config::Config) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(config.logging.level.as_directive().parse()?)
        .from_env()?;

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();

    // Route whisper.cpp and GGML logs through tracing
    whisper_rs::install_logging_hooks();

    Ok(())
}

//! Abstraction over the text-generation backend.
//!
//! Handlers only see [`TextGenerator`], so tests can swap the Gemini client
//! for an in-process stand-in.

use async_trait::async_trait;
use thiserror::Error;

use super::prompt::GenerationSettings;

#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request never got a response (DNS, connection refused, reset...).
    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid upstream response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`. `Ok(None)` means the call succeeded but
    /// the model returned nothing usable.
    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<Option<String>, GenerationError>;
}

//! Generative AI provider integration
//!
//! Capability traits for JSON-mode chat completion and image generation, with
//! OpenAI implementations and scriptable mocks.

pub mod mock;
pub mod openai;

pub use mock::{MockChatClient, MockImageGenerationClient};
pub use openai::{OpenAiChatClient, OpenAiImageClient};

use crate::Result;
use async_trait::async_trait;

/// Parameters for a single image generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGenerationParams {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
}

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Run one chat completion in strict JSON response mode and return the
    /// raw text of the first choice.
    async fn complete_json(&self, model: &str, system: &str, user: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate images and return the base64 payload of the first result.
    async fn generate_image(&self, params: &ImageGenerationParams) -> Result<String>;
}

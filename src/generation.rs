//! Tiered generation of gift card copy and background imagery.
//!
//! Each operation resolves the tier's parameters, renders a prompt, makes
//! exactly one provider call and shapes the reply into the response contract.

use crate::ai::{ChatService, ImageGenerationParams, ImageGenerationService};
use crate::models::{DescribeRequest, DescribeResult, ImageRequest, ImageResult};
use crate::prompts;
use crate::tier::Tier;
use crate::Result;
use serde::Deserialize;
use tracing::info;

pub const MAX_DESCRIPTIONS_MEDIUM: usize = 2;
pub const MAX_DESCRIPTIONS_SHORT: usize = 2;
pub const MAX_TAGS: usize = 12;
pub const MAX_NAME_SUGGESTIONS: usize = 5;

/// The chat provider's copy reply as parsed, before clamping.
///
/// Missing keys decode as empty sequences. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct DescribeReply {
    #[serde(default)]
    pub descriptions_medium: Vec<String>,
    #[serde(default)]
    pub descriptions_short: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub giftcard_name_suggestions: Vec<String>,
}

/// Parse the provider's raw text into a [`DescribeReply`].
///
/// Fails only when the text is not a JSON object whose known fields are
/// arrays of strings.
pub fn parse_describe_reply(raw: &str) -> Result<DescribeReply> {
    Ok(serde_json::from_str(raw)?)
}

/// Trim every element and cut each field to its maximum length.
pub fn clamp_describe_reply(reply: DescribeReply) -> DescribeResult {
    DescribeResult {
        descriptions_medium: clamp(reply.descriptions_medium, MAX_DESCRIPTIONS_MEDIUM),
        descriptions_short: clamp(reply.descriptions_short, MAX_DESCRIPTIONS_SHORT),
        tags: clamp(reply.tags, MAX_TAGS),
        giftcard_name_suggestions: clamp(reply.giftcard_name_suggestions, MAX_NAME_SUGGESTIONS),
    }
}

fn clamp(values: Vec<String>, max: usize) -> Vec<String> {
    values
        .into_iter()
        .take(max)
        .map(|value| value.trim().to_string())
        .collect()
}

pub fn describe_user_message(request: &DescribeRequest) -> String {
    prompts::render(
        prompts::DESCRIBE_USER,
        &[
            ("industry_type", &request.industry_type),
            ("prompt", &request.prompt),
        ],
    )
}

pub fn image_prompt(request: &ImageRequest) -> String {
    prompts::render(
        prompts::IMAGE_BACKGROUND,
        &[
            ("description", &request.description),
            ("giftcard_name", &request.giftcard_name),
            ("industry_type", &request.industry_type),
        ],
    )
}

/// Stateless service shared by every request handler.
pub struct GenerationService {
    chat: Box<dyn ChatService>,
    image: Box<dyn ImageGenerationService>,
}

impl GenerationService {
    pub fn new(chat: Box<dyn ChatService>, image: Box<dyn ImageGenerationService>) -> Self {
        Self { chat, image }
    }

    pub async fn describe(&self, tier: Tier, request: &DescribeRequest) -> Result<DescribeResult> {
        let profile = tier.profile();
        info!(
            "Generating {} copy for industry '{}' (model: {})",
            tier, request.industry_type, profile.chat_model
        );

        let raw = self
            .chat
            .complete_json(
                profile.chat_model,
                prompts::DESCRIBE_SYSTEM,
                &describe_user_message(request),
            )
            .await?;

        let reply = parse_describe_reply(&raw)?;
        Ok(clamp_describe_reply(reply))
    }

    pub async fn image(&self, tier: Tier, request: &ImageRequest) -> Result<ImageResult> {
        let profile = tier.profile();
        info!(
            "Generating {} image for '{}' (model: {}, quality: {}, size: {})",
            tier,
            request.giftcard_name,
            profile.image_model,
            profile.image_quality,
            profile.image_size
        );

        let params = ImageGenerationParams {
            model: profile.image_model.to_string(),
            prompt: image_prompt(request),
            size: profile.image_size.to_string(),
            quality: profile.image_quality.to_string(),
            n: 1,
        };

        let image_base64 = self.image.generate_image(&params).await?;
        Ok(ImageResult::png(image_base64))
    }
}

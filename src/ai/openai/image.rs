use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::{ImageGenerationParams, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;

/// OpenAI implementation of [`ImageGenerationService`].
pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
}

impl OpenAiImageClient {
    pub fn new(http: OpenAiHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(&self, params: &ImageGenerationParams) -> Result<String> {
        tracing::debug!(
            "Sending image generation request to OpenAI (model: {}, size: {}, quality: {})",
            params.model,
            params.size,
            params.quality
        );

        let request = ImageGenerationRequest {
            model: params.model.clone(),
            prompt: params.prompt.clone(),
            n: params.n,
            size: params.size.clone(),
            quality: params.quality.clone(),
        };

        let response: ImageGenerationResponse =
            self.http.post("/v1/images/generations", &request).await?;

        let image_data = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| Error::AiProvider("No image data in OpenAI response".to_string()))?;

        image_data.b64_json.ok_or_else(|| {
            Error::AiProvider("No base64 image payload in OpenAI response".to_string())
        })
    }
}

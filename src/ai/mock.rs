use super::{ChatService, ImageGenerationParams, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One recorded [`ChatService::complete_json`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCall {
    pub model: String,
    pub system: String,
    pub user: String,
}

enum Scripted<T> {
    Reply(T),
    Fail(String),
}

impl<T: Clone> Scripted<T> {
    fn to_result(&self) -> Result<T> {
        match self {
            Scripted::Reply(value) => Ok(value.clone()),
            Scripted::Fail(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}

/// Scripted chat provider. Replies cycle; with none scripted a complete,
/// well-formed copy reply is returned.
#[derive(Clone, Default)]
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<Scripted<String>>>>,
    calls: Arc<Mutex<Vec<ChatCall>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Reply(response.into()));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Fail(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<ChatCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn default_reply() -> String {
        serde_json::json!({
            "descriptions_medium": [
                "Treat someone to their next favorite cup. This card opens the door to handcrafted drinks and fresh pastries. Perfect for slow mornings and busy afternoons alike. Share the warmth with friends who run on coffee.",
                "Give the gift of a cozy corner and a great brew. From bold espresso to silky lattes, there is something for every taste. Pair it with a pastry for the full experience. A simple way to say you care."
            ],
            "descriptions_short": [
                "Fuel their day with a cup made just right.",
                "A warm gift for every coffee lover."
            ],
            "tags": [
                "coffee lovers", "morning ritual", "cozy", "gift for friends", "birthday",
                "thank you", "latte art", "students", "remote workers", "treat yourself"
            ],
            "giftcard_name_suggestions": [
                "Brew Bucks", "Latte Love", "Bean There", "Cup of Cheer", "Daily Grind"
            ]
        })
        .to_string()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn complete_json(&self, model: &str, system: &str, user: &str) -> Result<String> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(ChatCall {
                model: model.to_string(),
                system: system.to_string(),
                user: user.to_string(),
            });
            calls.len()
        };

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Self::default_reply())
        } else {
            responses[(count - 1) % responses.len()].to_result()
        }
    }
}

/// Scripted image provider. With nothing scripted it returns a 1x1 PNG.
#[derive(Clone, Default)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<Scripted<String>>>>,
    calls: Arc<Mutex<Vec<ImageGenerationParams>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_response(self, image_base64: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Reply(image_base64.into()));
        self
    }

    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Fail(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<ImageGenerationParams> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn default_image_base64() -> String {
        use base64::Engine as _;
        let png: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
            0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
            0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
            0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
            0x44, 0x41, // IDAT chunk
            0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2,
            0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
            0x44, 0xAE, 0x42, 0x60, 0x82,
        ];
        base64::engine::general_purpose::STANDARD.encode(png)
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, params: &ImageGenerationParams) -> Result<String> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(params.clone());
            calls.len()
        };

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Self::default_image_base64())
        } else {
            responses[(count - 1) % responses.len()].to_result()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ImageGenerationParams {
        ImageGenerationParams {
            model: "m".to_string(),
            prompt: "p".to_string(),
            size: "1024x1024".to_string(),
            quality: "low".to_string(),
            n: 1,
        }
    }

    #[tokio::test]
    async fn test_mock_chat_default_reply_is_json() {
        let client = MockChatClient::new();
        let reply = client.complete_json("m", "s", "u").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["giftcard_name_suggestions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_mock_chat_custom_responses_cycle() {
        let client = MockChatClient::new()
            .with_response("first")
            .with_error("boom");

        assert_eq!(client.complete_json("m", "s", "u").await.unwrap(), "first");
        let err = client.complete_json("m", "s", "u").await.unwrap_err();
        assert_eq!(err.to_string(), "AI provider error: boom");
        assert_eq!(client.complete_json("m", "s", "u").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_mock_chat_records_calls() {
        let client = MockChatClient::new();
        client.complete_json("gpt", "sys", "usr").await.unwrap();

        assert_eq!(client.get_call_count(), 1);
        assert_eq!(
            client.calls()[0],
            ChatCall {
                model: "gpt".to_string(),
                system: "sys".to_string(),
                user: "usr".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_mock_image_default_is_png() {
        use base64::Engine as _;
        let client = MockImageGenerationClient::new();
        let b64 = client.generate_image(&params()).await.unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(client.calls(), vec![params()]);
    }

    #[tokio::test]
    async fn test_mock_image_error() {
        let client = MockImageGenerationClient::new().with_error("quota exceeded");
        let err = client.generate_image(&params()).await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}

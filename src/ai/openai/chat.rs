use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat};
use crate::ai::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;

/// OpenAI implementation of [`ChatService`].
///
/// The model is chosen per call so one client serves every tier.
pub struct OpenAiChatClient {
    http: OpenAiHttpClient,
}

impl OpenAiChatClient {
    pub fn new(http: OpenAiHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatService for OpenAiChatClient {
    async fn complete_json(&self, model: &str, system: &str, user: &str) -> Result<String> {
        tracing::debug!("Sending chat completion request to OpenAI (model: {})", model);

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            response_format: Some(ResponseFormat::json_object()),
        };

        let response: ChatCompletionResponse =
            self.http.post("/v1/chat/completions", &request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::AiProvider("No response from OpenAI chat API".to_string()))?;

        if let Some(reason) = &choice.finish_reason {
            tracing::debug!("Chat completion finished: {}", reason);
        }

        choice
            .message
            .content
            .ok_or_else(|| Error::AiProvider("No response from OpenAI chat API".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAiChatClient {
        OpenAiChatClient::new(
            OpenAiHttpClient::new("test-key".to_string()).with_base_url(server.uri()),
        )
    }

    #[tokio::test]
    async fn test_complete_json_returns_first_choice() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": "{\"tags\":[\"cozy\"]}"
                    },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&server)
            .await;

        let text = client_for(&server)
            .complete_json("gpt-4o-mini", "system", "user")
            .await
            .unwrap();
        assert_eq!(text, "{\"tags\":[\"cozy\"]}");
    }

    #[tokio::test]
    async fn test_complete_json_sends_model_messages_and_json_mode() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    { "role": "system", "content": "be a copywriter" },
                    { "role": "user", "content": "Industry type: cafe" }
                ],
                "response_format": { "type": "json_object" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "{}" },
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .complete_json("gpt-3.5-turbo", "be a copywriter", "Industry type: cafe")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_choices_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete_json("gpt-4o-mini", "s", "u")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete_json("gpt-4o-mini", "s", "u")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
        assert!(err.to_string().contains("rate limited"));
    }
}

//! OpenAI completion provider implementation.
//!
//! Implements `CompletionProvider` from `wayfarer-core` on top of
//! [`async_openai`] chat completions. Requests run with temperature 0 and
//! no output cap; the configured model applies to every call.

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use async_openai::Client;
use secrecy::ExposeSecret;
use serde_json::json;

use wayfarer_core::llm::provider::CompletionProvider;
use wayfarer_types::chat::{ConversationTurn, TurnRole};
use wayfarer_types::llm::CompletionError;

use crate::config::AppConfig;

/// Completion provider backed by the OpenAI chat completions API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiChatProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatProvider {
    /// Create a provider with an explicit key and model.
    pub fn new(api_key: &str, model: impl Into<String>) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(api_key);

        Self {
            client: Client::with_config(openai_config),
            model: model.into(),
        }
    }

    /// Create a provider from environment configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.expose_secret(), config.model.clone())
    }

    /// Build a [`CreateChatCompletionRequest`] from a conversation context.
    fn build_request(&self, context: &[ConversationTurn]) -> CreateChatCompletionRequest {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(context.len());

        for turn in context {
            let msg = match turn.role {
                TurnRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            turn.content.clone(),
                        ),
                        name: None,
                    },
                ),
                TurnRole::Human => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(
                            turn.content.clone(),
                        ),
                        name: None,
                    },
                ),
                TurnRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                turn.content.clone(),
                            )),
                            refusal: None,
                            name: None,
                            audio: None,
                            tool_calls: None,
                            function_call: None,
                        },
                    )
                }
            };
            messages.push(msg);
        }

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(0.0),
            ..Default::default()
        }
    }
}

impl CompletionProvider for OpenAiChatProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        context: &[ConversationTurn],
    ) -> Result<ConversationTurn, CompletionError> {
        let request = self.build_request(context);

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let mut turn = ConversationTurn::assistant(content)
            .with_extra("model", json!(response.model))
            .with_extra("response_id", json!(response.id));

        if let Some(usage) = response.usage {
            turn = turn
                .with_extra("prompt_tokens", json!(usage.prompt_tokens))
                .with_extra("completion_tokens", json!(usage.completion_tokens));
        }

        Ok(turn)
    }
}

/// Map an `async_openai::error::OpenAIError` to a [`CompletionError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> CompletionError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                CompletionError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                CompletionError::RateLimited {
                    retry_after_ms: None,
                }
            } else {
                CompletionError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => {
            if let Some(status) = reqwest_err.status() {
                match status.as_u16() {
                    401 => CompletionError::AuthenticationFailed,
                    429 => CompletionError::RateLimited {
                        retry_after_ms: None,
                    },
                    _ => CompletionError::Provider {
                        message: err.to_string(),
                    },
                }
            } else {
                CompletionError::Network(err.to_string())
            }
        }
        OpenAIError::JSONDeserialize(_, content) => {
            CompletionError::Deserialization(format!("failed to parse response: {content}"))
        }
        _ => CompletionError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_and_model() {
        let provider = OpenAiChatProvider::new("sk-test", "gpt-4o");
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model, "gpt-4o");
    }

    #[test]
    fn test_build_request_maps_roles_in_order() {
        let provider = OpenAiChatProvider::new("sk-test", "gpt-4o");
        let context = [
            ConversationTurn::system("You plan trips."),
            ConversationTurn::human("hi"),
            ConversationTurn::assistant("hello!"),
            ConversationTurn::human("plan me a weekend"),
        ];

        let request = provider.build_request(&context);
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.messages.len(), 4);
        assert!(matches!(
            request.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            request.messages[1],
            ChatCompletionRequestMessage::User(_)
        ));
        assert!(matches!(
            request.messages[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
        assert!(matches!(
            request.messages[3],
            ChatCompletionRequestMessage::User(_)
        ));
    }
}

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppResult, GenerationFailure};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A chat-completion request: model id, role-tagged messages and temperature.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ReplyChoice>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionReply {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// A generative text model returning a single text payload per request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> AppResult<String>;
}

pub struct OpenAiChatModel {
    client: Client<OpenAIConfig>,
}

impl OpenAiChatModel {
    pub fn new(api_key: &SecretString, api_base: Option<&str>) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key.expose_secret());
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }

        Self {
            client: Client::with_config(config),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, request: ChatRequest) -> AppResult<String> {
        let reply: ChatCompletionReply = self.client.chat().create_byot(&request).await?;

        let text = reply
            .into_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| GenerationFailure::ModelCall("model returned no content".to_string()))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_in_chat_completions_shape() {
        let request = ChatRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("rules"), ChatMessage::user("Transcript: x")],
            temperature: 0.5,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Transcript: x");
        assert_eq!(json["temperature"], 0.5);
    }

    #[test]
    fn reply_text_is_first_choice_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "[1, 2]"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ]
        }"#;
        let reply: ChatCompletionReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("[1, 2]"));
    }

    #[test]
    fn reply_without_choices_has_no_text() {
        let reply: ChatCompletionReply = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(reply.into_text().is_none());

        let reply: ChatCompletionReply =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(reply.into_text().is_none());
    }
}

//! [`Copilot`] backend for OpenAI-compatible `chat/completions` endpoints.
//!
//! The conversation is forwarded as-is behind a fixed system prompt. With
//! streaming enabled the answer is read as Server-Sent Events, one
//! `choices[0].delta.content` fragment per `data:` line, until `data: [DONE]`.
//! This backend does no retrieval; the retrieved-context list is always empty.

use crate::chat::{Answer, ChatMessage, Copilot, Reply};
use crate::config::Settings;
use crate::error::CopilotError;
use crate::http::build_client;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader};

pub const SYSTEM_PROMPT: &str = "You are Macroeconomics Copilot, an assistant that answers questions about macroeconomics and the regional economic outlook around the world. Be concise and say when you are unsure.";

#[derive(Debug, Clone)]
pub struct OpenAiCopilot {
    http: HttpClient,
    base_url: String,
    api_key: String,
    model: String,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamingDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamingDelta {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCopilot {
    /// Build the engine for one API key. Streams answers by default.
    pub fn new(api_key: &str, settings: &Settings) -> Result<Self, CopilotError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(CopilotError::MissingApiKey);
        }
        Ok(Self {
            http: build_client(settings.chat_timeout)?,
            base_url: settings.openai_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            stream: true,
        })
    }

    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request<'a>(&'a self, prompt: &'a str, history: &'a [ChatMessage]) -> ChatCompletionRequest<'a> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: SYSTEM_PROMPT,
        });
        messages.extend(history.iter().map(|m| WireMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));
        messages.push(WireMessage {
            role: "user",
            content: prompt,
        });
        ChatCompletionRequest {
            model: &self.model,
            messages,
            stream: self.stream,
        }
    }
}

impl Copilot for OpenAiCopilot {
    fn ask(&self, prompt: &str, history: &[ChatMessage]) -> Result<Reply, CopilotError> {
        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("POST {} (model {}, {} prior messages)", url, self.model, history.len());
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request(prompt, history))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(CopilotError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let answer = if self.stream {
            Answer::Streaming(Box::new(SseFragments::new(BufReader::new(resp))))
        } else {
            let parsed: ChatCompletionResponse = resp.json()?;
            let text = parsed
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .ok_or_else(|| CopilotError::Malformed("no choices in response".into()))?;
            Answer::Complete(text)
        };
        Ok(Reply {
            retrieved: Vec::new(),
            answer,
        })
    }
}

/// Text fragments of a streamed chat completion.
pub struct SseFragments<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> SseFragments<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for SseFragments<R> {
    type Item = Result<String, CopilotError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        while !self.done {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let Some(data) = line.trim_end().strip_prefix("data:") else {
                        // blank separators, comments, `event:` lines
                        continue;
                    };
                    let data = data.trim();
                    if data.is_empty() {
                        continue;
                    }
                    if data == "[DONE]" {
                        self.done = true;
                        break;
                    }
                    match serde_json::from_str::<StreamChunk>(data) {
                        Ok(chunk) => {
                            let content = chunk
                                .choices
                                .into_iter()
                                .next()
                                .and_then(|c| c.delta.content)
                                .filter(|c| !c.is_empty());
                            if let Some(content) = content {
                                return Some(Ok(content));
                            }
                        }
                        Err(e) => {
                            self.done = true;
                            return Some(Err(CopilotError::Malformed(format!(
                                "{e}: {data}"
                            ))));
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(CopilotError::Transport(e.to_string())));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;
    use std::io::Cursor;

    fn fragments(body: &str) -> Vec<Result<String, CopilotError>> {
        SseFragments::new(Cursor::new(body.as_bytes().to_vec())).collect()
    }

    #[test]
    fn yields_delta_contents_until_done() {
        let body = concat!(
            ": keep-alive\n\n",
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"GDP \"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"grew.\"}}]}\n\n",
            "data: [DONE]\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n\n",
        );
        let out: Vec<String> = fragments(body).into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(out, ["GDP ", "grew."]);
    }

    #[test]
    fn handles_crlf_and_missing_done() {
        let body = "data: {\"choices\":[{\"delta\":{\"content\":\"a\"}}]}\r\n\r\n";
        let out: Vec<String> = fragments(body).into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(out, ["a"]);
    }

    #[test]
    fn malformed_chunk_ends_the_stream_with_an_error() {
        let body = "data: {not json}\n\ndata: {\"choices\":[{\"delta\":{\"content\":\"x\"}}]}\n\n";
        let out = fragments(body);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], Err(CopilotError::Malformed(_))));
    }

    #[test]
    fn request_carries_system_history_and_prompt() {
        let settings = Settings::default();
        let copilot = OpenAiCopilot::new("sk-test", &settings).unwrap();
        let history = vec![
            ChatMessage::assistant("hi"),
            ChatMessage {
                role: Role::User,
                content: "earlier".into(),
            },
            ChatMessage::assistant("reply"),
        ];
        let body = serde_json::to_value(copilot.request("now?", &history)).unwrap();
        let roles: Vec<&str> = body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, ["system", "assistant", "user", "assistant", "user"]);
        assert_eq!(body["messages"][4]["content"], "now?");
        assert_eq!(body["stream"], true);
        assert_eq!(body["model"], settings.model.as_str());
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            OpenAiCopilot::new("  ", &Settings::default()),
            Err(CopilotError::MissingApiKey)
        ));
    }
}

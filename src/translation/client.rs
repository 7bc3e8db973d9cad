use std::borrow::Cow;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::language::DEFAULT_TARGET_LANGUAGE;
use super::prompt::{build_user_prompt, is_single_word, system_prompt};
use super::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{Result, TzhError};

/// Language pair for a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages {
    /// Target language code or name.
    pub target: String,
    /// Source language; `None` lets the model detect it.
    pub source: Option<String>,
}

impl Default for Languages {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET_LANGUAGE.to_string(),
            source: None,
        }
    }
}

/// Everything needed for one chat completion call.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub model: String,
    pub endpoint: String,
    pub api_key: String,
    pub target_language: String,
    pub source_language: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Ask for the common senses of a word instead of a translation.
    pub word_mode: bool,
}

impl TranslationRequest {
    /// Word mode starts out as whether `source_text` is a single word.
    pub fn new(source_text: impl Into<String>, config: &Config, languages: &Languages) -> Self {
        let source_text = source_text.into();
        Self {
            word_mode: is_single_word(&source_text),
            source_text,
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            target_language: languages.target.clone(),
            source_language: languages.source.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens_cap(),
        }
    }

    #[must_use]
    pub fn with_word_mode(mut self, word_mode: bool) -> Self {
        self.word_mode = word_mode;
        self
    }

    /// `<endpoint>/chat/completions`, unless the endpoint already names it.
    pub fn completions_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else {
            format!("{base}/chat/completions")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
}

// Borrowed fields avoid cloning the source text just to serialize it
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Sends translation requests through a [`Transport`].
pub struct TranslationClient<T = HttpTransport> {
    transport: T,
}

impl TranslationClient<HttpTransport> {
    /// Client over HTTP using the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout))?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> TranslationClient<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let text = request.source_text.trim();
        if text.is_empty() {
            return Err(TzhError::EmptyInput);
        }

        let user_prompt = build_user_prompt(
            text,
            &request.target_language,
            request.source_language.as_deref(),
        );

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(system_prompt(request.word_mode)),
                },
                Message {
                    role: "user",
                    content: Cow::Owned(user_prompt),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let url = request.completions_url();
        debug!(
            %url,
            model = %request.model,
            chars = text.chars().count(),
            word_mode = request.word_mode,
            "sending translation request"
        );

        let response = self
            .transport
            .post_json(&url, &request.api_key, &chat_request)
            .await?;

        if !response.is_success() {
            debug!(status = response.status, "translation request rejected");
            return Err(TzhError::Api {
                status: response.status,
                body: response.body.trim().to_string(),
            });
        }

        let translated_text = parse_completion(&response.body)?;
        Ok(TranslationResult { translated_text })
    }
}

fn parse_completion(body: &str) -> Result<String> {
    let completion: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TzhError::InvalidResponse(format!("cannot parse body: {e}")))?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| TzhError::InvalidResponse("no choices returned".to_string()))?
        .message
        .content
        .ok_or_else(|| TzhError::InvalidResponse("choice has no content".to_string()))?;

    Ok(strip_wrapping_quotes(content.trim()).to_string())
}

/// Removes one pair of matching quotes around the whole reply.
fn strip_wrapping_quotes(text: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text)
}

//! Generation request construction.
//!
//! A [`GenerationRequest`] is built fresh from the form on every submit and
//! discarded once the response has been rendered. Construction enforces the
//! only validation the studio performs: non-empty keyword and system prompt.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    DEFAULT_PROMPT_COUNT, EMPTY_KEYWORD_NOTICE, EMPTY_SYSTEM_PROMPT_NOTICE, MAX_PROMPT_COUNT,
};
use crate::provider::ProviderKind;

/// A submit was blocked before any network call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", EMPTY_KEYWORD_NOTICE)]
    EmptyKeyword,
    #[error("{}", EMPTY_SYSTEM_PROMPT_NOTICE)]
    EmptySystemPrompt,
}

/// Everything needed for one proxy call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub provider: ProviderKind,
    pub model: String,
    pub system_prompt: String,
    pub keyword: String,
    pub count: u32,
}

/// JSON body posted to the proxy endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyPayload<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub system_prompt: &'a str,
    pub user_keyword: String,
}

impl GenerationRequest {
    /// Builds a request from raw form values.
    ///
    /// The keyword is checked first, so a form with both fields blank
    /// reports [`ValidationError::EmptyKeyword`].
    pub fn new(
        provider: ProviderKind,
        model: impl Into<String>,
        system_prompt: &str,
        keyword: &str,
        count: u32,
    ) -> Result<Self, ValidationError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::EmptyKeyword);
        }
        let system_prompt = system_prompt.trim();
        if system_prompt.is_empty() {
            return Err(ValidationError::EmptySystemPrompt);
        }
        Ok(Self {
            provider,
            model: model.into(),
            system_prompt: system_prompt.to_string(),
            keyword: keyword.to_string(),
            count,
        })
    }

    /// The user message asking for exactly `count` numbered variations.
    pub fn instruction(&self) -> String {
        format!(
            "Based on the user's idea, generate {} distinct and creative variations for a Midjourney prompt.\n\
             User's Idea: \"{}\"\n\
             Please format the output clearly. Each prompt must start on a new line and be prefixed with \"1. \", \"2. \", etc. \
             Do not add any extra text or explanations before or after the list of prompts.",
            self.count, self.keyword
        )
    }

    /// The proxy body. `userKeyword` carries the full instruction, which
    /// embeds the raw keyword.
    pub fn payload(&self) -> ProxyPayload<'_> {
        ProxyPayload {
            provider: self.provider.as_str(),
            model: &self.model,
            system_prompt: &self.system_prompt,
            user_keyword: self.instruction(),
        }
    }
}

/// Parses the count field. Blank or unparsable input falls back to the
/// default; numbers are clamped to `1..=MAX_PROMPT_COUNT`.
pub fn parse_count(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) => n.clamp(1, MAX_PROMPT_COUNT),
        Err(_) => DEFAULT_PROMPT_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            ProviderKind::Anthropic,
            "claude-3-5-haiku-20241022",
            "  be creative  ",
            "  red fox ",
            4,
        )
        .unwrap()
    }

    #[test]
    fn test_fields_are_trimmed() {
        let req = request();
        assert_eq!(req.keyword, "red fox");
        assert_eq!(req.system_prompt, "be creative");
    }

    #[test]
    fn test_blank_keyword_rejected_first() {
        let err = GenerationRequest::new(ProviderKind::OpenAI, "gpt-4o", "", "   ", 5);
        assert_eq!(err, Err(ValidationError::EmptyKeyword));
    }

    #[test]
    fn test_blank_system_prompt_rejected() {
        let err = GenerationRequest::new(ProviderKind::OpenAI, "gpt-4o", " \n ", "cat", 5);
        assert_eq!(err, Err(ValidationError::EmptySystemPrompt));
        assert_eq!(
            ValidationError::EmptySystemPrompt.to_string(),
            EMPTY_SYSTEM_PROMPT_NOTICE
        );
    }

    #[test]
    fn test_instruction_mentions_count_and_keyword() {
        let text = request().instruction();
        assert!(text.contains("generate 4 distinct"));
        assert!(text.contains("User's Idea: \"red fox\""));
        assert!(text.contains("prefixed with \"1. \", \"2. \""));
    }

    #[test]
    fn test_payload_uses_camel_case() {
        let req = request();
        let json = serde_json::to_value(req.payload()).unwrap();
        assert_eq!(json["provider"], "anthropic");
        assert_eq!(json["model"], "claude-3-5-haiku-20241022");
        assert_eq!(json["systemPrompt"], "be creative");
        assert_eq!(json["userKeyword"], req.instruction());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("7"), 7);
        assert_eq!(parse_count(" 3 "), 3);
        assert_eq!(parse_count("0"), 1);
        assert_eq!(parse_count("500"), MAX_PROMPT_COUNT);
        assert_eq!(parse_count(""), DEFAULT_PROMPT_COUNT);
        assert_eq!(parse_count("ten"), DEFAULT_PROMPT_COUNT);
    }
}

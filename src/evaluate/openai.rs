use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::checklist::ChecklistItem;
use crate::error::ScoringError;
use crate::evaluate::{BackendScore, MAX_ITEM_SCORE, ScoringBackend};
use crate::model::KeywordSet;
use crate::util::truncate_chars;

const CHAT_COMPLETIONS_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const API_KEY_VARIABLE: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DOCUMENT_EXCERPT_CHARS: usize = 4000;
const PROMPT_KEYWORD_LIMIT: usize = 10;

pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn from_env(model: String, timeout: Duration) -> Result<Option<Self>> {
        let Some(api_key) = std::env::var(API_KEY_VARIABLE)
            .ok()
            .filter(|value| !value.trim().is_empty())
        else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build scoring service http client")?;

        Ok(Some(Self {
            client,
            api_key,
            model,
        }))
    }

    fn build_request(
        &self,
        item: &ChecklistItem,
        document_text: &str,
        keywords: &KeywordSet,
    ) -> ChatRequest<'_> {
        let keyword_list: Vec<&str> = keywords.top(PROMPT_KEYWORD_LIMIT).collect();
        let keyword_line = if keyword_list.is_empty() {
            "No keywords provided".to_string()
        } else {
            keyword_list.join(", ")
        };

        let prompt = format!(
            "Score this page content on one SEO criterion.\n\n\
             Criterion: {name}\n\
             Rubric: {rubric}\n\n\
             Content (may be truncated):\n{excerpt}\n\n\
             Target keywords: {keyword_line}\n\n\
             Respond with a JSON object: {{\"score\": <integer 0-10>, \
             \"details\": \"<brief explanation>\", \
             \"suggestion\": \"<one actionable improvement, or empty if none needed>\"}}",
            name = item.name,
            rubric = item.rubric,
            excerpt = truncate_chars(document_text, DOCUMENT_EXCERPT_CHARS),
        );

        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are an expert SEO content analyzer.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.1,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

impl ScoringBackend for OpenAiBackend {
    fn score_item(
        &self,
        item: &ChecklistItem,
        document_text: &str,
        keywords: &KeywordSet,
    ) -> Result<BackendScore, ScoringError> {
        let request = self.build_request(item, document_text, keywords);

        let response = self
            .client
            .post(CHAT_COMPLETIONS_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoringError::Status(status));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|err| ScoringError::Unparsable(err.to_string()))?;

        let content = body
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| ScoringError::Unparsable("response has no choices".to_string()))?;

        let judgement: ItemJudgement = serde_json::from_str(content)
            .map_err(|err| ScoringError::Unparsable(err.to_string()))?;

        if judgement.score < 0 || judgement.score > i64::from(MAX_ITEM_SCORE) {
            return Err(ScoringError::OutOfRange(judgement.score));
        }

        Ok(BackendScore {
            score: judgement.score as u8,
            details: judgement.details,
            suggestion: judgement
                .suggestion
                .filter(|text| !text.trim().is_empty()),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ItemJudgement {
    score: i64,
    details: String,
    #[serde(default)]
    suggestion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgement_json_parses_with_and_without_suggestion() {
        let full: ItemJudgement = serde_json::from_str(
            r#"{"score": 7, "details": "keyword density is low", "suggestion": "Add the keyword to the intro."}"#,
        )
        .unwrap();
        assert_eq!(full.score, 7);
        assert!(full.suggestion.is_some());

        let bare: ItemJudgement =
            serde_json::from_str(r#"{"score": 10, "details": "looks good"}"#).unwrap();
        assert_eq!(bare.score, 10);
        assert!(bare.suggestion.is_none());
    }

    #[test]
    fn chat_response_with_no_choices_parses_to_empty() {
        let body: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(body.choices.is_empty());
    }
}

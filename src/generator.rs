use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::llm;
use crate::prompts;
use crate::LLMParams;

/// One generated article, as the model returns it.
///
/// The prompt asks for a title of at most 35 characters and a description of
/// at most 120, but neither bound is enforced here. A missing, null, or
/// non-string title or description decodes as empty; only the body must be
/// a non-empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleDraft {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub meta_description: String,
    pub body_markdown: String,
}

// The prompt dictates string metadata, but JSON-mode models still emit null
// or odd types there. Anything but a string decodes as empty.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

fn extract_llm_params(config: &Config) -> LLMParams {
    LLMParams {
        api_key: config.api_key.clone(),
        model: config.model.clone(),
    }
}

/// Decodes a draft from the JSON object the model produced.
///
/// A draft whose body is empty counts as a generation failure; the caller
/// gets `None` and the reason lands in the log.
pub fn draft_from_json(value: Value) -> Option<ArticleDraft> {
    let draft: ArticleDraft = match serde_json::from_value(value) {
        Ok(draft) => draft,
        Err(e) => {
            error!("Model answer did not match the expected article fields: {}", e);
            return None;
        }
    };

    if draft.body_markdown.is_empty() {
        error!("Model answer carried an empty article body.");
        return None;
    }

    Some(draft)
}

/// Generates the article draft for the configured keyword with a single
/// model call.
pub async fn generate_draft(config: &Config) -> Option<ArticleDraft> {
    info!(
        "Starting article generation for keyword: {}",
        config.target_keyword
    );

    let params = extract_llm_params(config);
    let prompt = prompts::article_prompt(&config.target_keyword, &config.search_intent);
    let value = llm::generate_json_response(&prompt, &params).await?;
    let draft = draft_from_json(value)?;

    info!("Article body and metadata generated.");
    Some(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_complete_draft() {
        let value = json!({
            "title": "2026年のAIトレンド",
            "meta_description": "来年の主要トレンドを解説。",
            "body_markdown": "## 導入\n本文",
        });
        let draft = draft_from_json(value).expect("complete draft decodes");
        assert_eq!(draft.title, "2026年のAIトレンド");
        assert_eq!(draft.meta_description, "来年の主要トレンドを解説。");
        assert_eq!(draft.body_markdown, "## 導入\n本文");
    }

    #[test]
    fn empty_body_is_a_generation_failure() {
        let value = json!({
            "title": "T",
            "meta_description": "D",
            "body_markdown": "",
        });
        assert!(draft_from_json(value).is_none());
    }

    #[test]
    fn missing_body_is_a_generation_failure() {
        let value = json!({
            "title": "T",
            "meta_description": "D",
        });
        assert!(draft_from_json(value).is_none());
    }

    #[test]
    fn non_string_body_is_a_generation_failure() {
        let value = json!({
            "title": "T",
            "meta_description": "D",
            "body_markdown": 42,
        });
        assert!(draft_from_json(value).is_none());
    }

    #[test]
    fn missing_title_and_description_default_to_empty() {
        let value = json!({
            "body_markdown": "本文",
        });
        let draft = draft_from_json(value).expect("body alone is enough");
        assert_eq!(draft.title, "");
        assert_eq!(draft.meta_description, "");
    }

    #[test]
    fn null_title_is_a_tolerated_answer() {
        let value = json!({
            "title": null,
            "meta_description": "M",
            "body_markdown": "## X\n本文",
        });
        let draft = draft_from_json(value).expect("null title must not fail the draft");
        assert_eq!(draft.title, "");
        assert_eq!(draft.meta_description, "M");
    }

    #[test]
    fn non_string_metadata_decodes_as_empty() {
        let value = json!({
            "title": 42,
            "meta_description": null,
            "body_markdown": "本文",
        });
        let draft = draft_from_json(value).expect("odd metadata types must not fail the draft");
        assert_eq!(draft.title, "");
        assert_eq!(draft.meta_description, "");
    }

    #[test]
    fn whitespace_only_body_is_kept() {
        let value = json!({
            "body_markdown": " ",
        });
        assert!(draft_from_json(value).is_some());
    }
}

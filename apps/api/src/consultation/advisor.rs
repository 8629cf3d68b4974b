//! Consultation advisor: question + profile + recent history -> free-text
//! answer. No JSON schema here, so there is no parse-retry loop; an empty
//! reply is the only unusable one.

use anyhow::anyhow;
use tracing::info;

use crate::consultation::prompts::{CONSULT_PROMPT_TEMPLATE, CONSULT_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::TextModel;
use crate::models::conversation::{ConversationTurn, Role};
use crate::models::profile::Profile;

/// Turns carried into the prompt. Older history is dropped, not summarized.
pub const HISTORY_WINDOW: usize = 12;

pub async fn consult(
    model: &dyn TextModel,
    profile: &Profile,
    history: &[ConversationTurn],
    question: &str,
) -> Result<String, AppError> {
    let prompt = build_prompt(profile, history, question)?;

    let answer = model
        .generate(&prompt, CONSULT_SYSTEM)
        .await
        .map_err(|e| AppError::Upstream(format!("consultation call failed: {e}")))?;

    let answer = answer.trim().to_string();
    if answer.is_empty() {
        return Err(AppError::ModelParse(
            "consultation reply was empty".to_string(),
        ));
    }

    info!("Consultation answered ({} chars)", answer.len());
    Ok(answer)
}

pub fn build_prompt(
    profile: &Profile,
    history: &[ConversationTurn],
    question: &str,
) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize profile: {e}")))?;

    let window_start = history.len().saturating_sub(HISTORY_WINDOW);
    let history_text = if history.is_empty() {
        "(none)".to_string()
    } else {
        history[window_start..]
            .iter()
            .map(|turn| {
                let speaker = match turn.role {
                    Role::User => "User",
                    Role::Assistant => "Advisor",
                };
                format!("{speaker}: {}", turn.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Ok(CONSULT_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{history}", &history_text)
        .replace("{question}", question))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    struct FixedModel {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextModel for FixedModel {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn profile() -> Profile {
        Profile {
            full_name: "Asha Rao".to_string(),
            age: 24,
            education: "BS CS".to_string(),
            technical_background: "Python internships".to_string(),
        }
    }

    fn turns(n: usize) -> Vec<ConversationTurn> {
        (0..n)
            .map(|i| {
                let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
                ConversationTurn::new(role, format!("turn {i}"))
            })
            .collect()
    }

    #[test]
    fn test_prompt_embeds_profile_question_and_history() {
        let prompt = build_prompt(&profile(), &turns(2), "Should I learn Rust?").unwrap();
        assert!(prompt.contains("BS CS"));
        assert!(prompt.contains("Should I learn Rust?"));
        assert!(prompt.contains("User: turn 0"));
        assert!(prompt.contains("Advisor: turn 1"));
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        let prompt = build_prompt(&profile(), &[], "Hi").unwrap();
        assert!(prompt.contains("(none)"));
    }

    #[test]
    fn test_history_is_capped_to_window() {
        let prompt = build_prompt(&profile(), &turns(20), "Hi").unwrap();
        // Only the last HISTORY_WINDOW turns appear.
        assert!(!prompt.contains("turn 7"));
        assert!(prompt.contains("turn 8"));
        assert!(prompt.contains("turn 19"));
    }

    #[tokio::test]
    async fn test_answer_is_trimmed_prose() {
        let model = FixedModel {
            reply: "  Learn Rust after Python.  ".to_string(),
            prompts: Mutex::new(Vec::new()),
        };
        let answer = consult(&model, &profile(), &[], "Should I learn Rust?")
            .await
            .unwrap();
        assert_eq!(answer, "Learn Rust after Python.");
    }

    #[tokio::test]
    async fn test_blank_answer_is_a_parse_error() {
        let model = FixedModel {
            reply: "   ".to_string(),
            prompts: Mutex::new(Vec::new()),
        };
        let err = consult(&model, &profile(), &[], "Hi").await.unwrap_err();
        assert!(matches!(err, AppError::ModelParse(_)));
    }
}

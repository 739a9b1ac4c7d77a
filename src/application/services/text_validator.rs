use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::application::ports::WordTokenizer;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

pub const DEFAULT_MIN_ALPHA_RATIO: f64 = 0.3;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TextValidationError {
    #[error("Text contains disallowed patterns (e.g., email addresses).")]
    DisallowedPattern,
    #[error("Text must contain valid words.")]
    NoAlphabeticContent,
    #[error("Text contains too many special characters.")]
    TooManySpecialCharacters,
    #[error("text tokenization failed: {0}")]
    TokenizationFailed(String),
}

/// Accepts free text that reads like natural language.
pub struct TextValidator {
    tokenizer: Arc<dyn WordTokenizer>,
    min_alpha_ratio: f64,
}

impl TextValidator {
    pub fn new(tokenizer: Arc<dyn WordTokenizer>, min_alpha_ratio: f64) -> Self {
        Self {
            tokenizer,
            min_alpha_ratio,
        }
    }

    /// Validates `text` on a blocking worker and returns the processed form.
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn validate(&self, text: &str) -> Result<String, TextValidationError> {
        let tokenizer = Arc::clone(&self.tokenizer);
        let min_alpha_ratio = self.min_alpha_ratio;
        let owned = text.to_string();

        tokio::task::spawn_blocking(move || {
            check_text(tokenizer.as_ref(), &owned, min_alpha_ratio)
        })
        .await
        .map_err(|e| TextValidationError::TokenizationFailed(format!("task join error: {e}")))??;

        tracing::debug!("Text accepted");
        Ok(format!("Processed text: {text}"))
    }
}

/// Runs the email, alphabetic-content and special-character checks in order.
pub fn check_text(
    tokenizer: &dyn WordTokenizer,
    text: &str,
    min_alpha_ratio: f64,
) -> Result<(), TextValidationError> {
    if EMAIL_PATTERN.is_match(text) {
        return Err(TextValidationError::DisallowedPattern);
    }

    let alpha_chars: usize = tokenizer
        .tokenize(text)
        .iter()
        .filter(|token| token.is_alpha)
        .map(|token| token.char_len())
        .sum();

    if alpha_chars == 0 {
        return Err(TextValidationError::NoAlphabeticContent);
    }

    let total_chars = text.chars().count();
    let ratio = alpha_chars as f64 / total_chars as f64;
    tracing::trace!(alpha_chars, total_chars, ratio, "Alphabetic ratio computed");

    if ratio < min_alpha_ratio {
        return Err(TextValidationError::TooManySpecialCharacters);
    }

    Ok(())
}

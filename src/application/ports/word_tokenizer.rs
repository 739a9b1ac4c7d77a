use crate::domain::Token;

/// Splits natural-language text into word-like tokens.
///
/// Implementations are built once at startup and shared between requests,
/// and are called from blocking worker threads.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

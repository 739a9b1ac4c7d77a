use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::WordTokenizer;
use crate::domain::Token;

/// Tokenizes along Unicode word boundaries (UAX #29), then splits each
/// segment into letter runs.
///
/// "Don't" becomes `Don`, `'`, `t`, so contractions still count as words.
/// Punctuation runs become their own tokens; whitespace is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for segment in text.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }
            push_letter_runs(segment, &mut tokens);
        }
        tokens
    }
}

fn push_letter_runs(segment: &str, tokens: &mut Vec<Token>) {
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (idx, ch) in segment.char_indices() {
        let is_letter = ch.is_alphabetic();
        if previous.is_some_and(|was_letter| was_letter != is_letter) {
            tokens.push(Token::new(&segment[start..idx]));
            start = idx;
        }
        previous = Some(is_letter);
    }

    tokens.push(Token::new(&segment[start..]));
}

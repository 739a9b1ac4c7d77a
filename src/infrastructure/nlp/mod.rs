mod unicode_word_tokenizer;

pub use unicode_word_tokenizer::UnicodeWordTokenizer;

use std::sync::Arc;

use ainews_core::config::DUMMY_MODEL;
use ainews_core::{InferenceModel, Result};

use crate::Config;

pub mod dummy;
pub mod groq;

pub use dummy::DummyModel;
pub use groq::GroqModel;

/// Maximum sentences kept from any generated summary.
pub const SUMMARY_SENTENCES: usize = 2;

pub fn create_model(config: Option<Config>) -> Result<Arc<dyn InferenceModel>> {
    let config = config.unwrap_or_default();
    if config.model_name() == DUMMY_MODEL {
        return Ok(Arc::new(DummyModel::new()));
    }
    Ok(Arc::new(GroqModel::new(config)?))
}

/// Keeps the first `max` sentences of `text`.
pub fn limit_sentences(text: &str, max: usize) -> String {
    let text = text.trim();
    let mut count = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                count += 1;
                if count == max {
                    return text[..i + c.len_utf8()].to_string();
                }
            }
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_sentences() {
        assert_eq!(
            limit_sentences("One. Two! Three? Four.", 2),
            "One. Two!"
        );
        assert_eq!(limit_sentences("Version 3.5 ships today. More soon.", 1), "Version 3.5 ships today.");
        assert_eq!(limit_sentences("  no terminator  ", 2), "no terminator");
        assert_eq!(limit_sentences("", 2), "");
    }

    #[test]
    fn test_create_model_by_name() {
        let dummy = create_model(Some(Config {
            model_name: Some(DUMMY_MODEL.to_string()),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(dummy.name(), "Dummy");

        let groq = create_model(None).unwrap();
        assert_eq!(groq.name(), "Groq");
    }
}

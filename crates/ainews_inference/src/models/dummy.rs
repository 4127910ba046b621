use std::fmt;

use ainews_core::{InferenceModel, Result, SearchHit};

use super::{limit_sentences, SUMMARY_SENTENCES};

/// Offline summarizer: the leading sentences of the hit's excerpt.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn summarize_hit(&self, hit: &SearchHit) -> Result<String> {
        Ok(limit_sentences(&hit.excerpt, SUMMARY_SENTENCES))
    }
}

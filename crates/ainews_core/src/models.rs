use async_trait::async_trait;
use crate::types::SearchHit;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync {
    fn name(&self) -> &str;

    /// Write a 1-2 sentence summary of a search hit. An empty string means
    /// the hit could not be summarized.
    async fn summarize_hit(&self, hit: &SearchHit) -> Result<String>;
}

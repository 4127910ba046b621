use async_trait::async_trait;
use crate::types::DistributionResult;
use crate::Result;

#[async_trait]
pub trait Messenger: Send + Sync {
    fn name(&self) -> &str;

    /// Post `text` to `channel`. Failures reported by the remote side are
    /// returned as errors, never retried.
    async fn send_message(&self, channel: &str, text: &str) -> Result<DistributionResult>;
}

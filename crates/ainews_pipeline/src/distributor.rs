use std::sync::Arc;

use ainews_core::config::SLACK_CHANNEL;
use ainews_core::{Digest, DistributionResult, Messenger, Result};

use crate::logging::Logger;

/// Sends digests to the team channel. The channel is fixed.
pub struct Distributor {
    messenger: Arc<dyn Messenger>,
    logger: Logger,
}

impl Distributor {
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self {
            messenger,
            logger: Logger::new().with_prefix("[distributor]"),
        }
    }

    pub fn channel(&self) -> &'static str {
        SLACK_CHANNEL
    }

    pub async fn distribute(&self, digest: &Digest) -> Result<DistributionResult> {
        self.logger.info(&format!(
            "📨 Sending digest for {} to {} via {}",
            digest.date,
            self.channel(),
            self.messenger.name()
        ));
        let result = self
            .messenger
            .send_message(self.channel(), &digest.render())
            .await?;
        self.logger.info(&format!(
            "✅ Delivered to {} (ts: {})",
            result.channel,
            result.timestamp.as_deref().unwrap_or("-")
        ));
        Ok(result)
    }
}

pub mod client;

pub use client::SlackClient;

pub mod prelude {
    pub use super::client::SlackClient;
    pub use ainews_core::{DistributionResult, Error, Messenger, Result};
}

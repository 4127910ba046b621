pub mod coordinator;
pub mod curator;
pub mod distributor;
pub mod logging;

pub use coordinator::{Coordinator, RunReport, Stage};
pub use curator::Curator;
pub use distributor::Distributor;
pub use logging::{init_logging, Logger};

pub mod prelude {
    pub use super::{Coordinator, Curator, Distributor, RunReport, Stage};
    pub use ainews_core::{Digest, DistributionResult, Error, NewsItem, Result};
}

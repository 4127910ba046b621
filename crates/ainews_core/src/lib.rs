pub mod config;
pub mod error;
pub mod messaging;
pub mod models;
pub mod search;
pub mod types;

pub use error::{Error, Result};
pub use messaging::Messenger;
pub use models::InferenceModel;
pub use search::NewsSearch;
pub use types::{Category, Digest, DistributionResult, NewsItem, SearchHit};

pub mod duckduckgo;
pub mod utils;

pub use duckduckgo::DuckDuckGoSearch;

pub mod prelude {
    pub use super::duckduckgo::DuckDuckGoSearch;
    pub use ainews_core::{Category, Error, NewsSearch, Result, SearchHit};
}

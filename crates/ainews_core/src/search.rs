use async_trait::async_trait;
use crate::types::{Category, SearchHit};
use crate::Result;

#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Returns the name of the search backend
    fn name(&self) -> &str;

    /// Searches recent news for one category
    async fn search_news(&self, category: &Category) -> Result<Vec<SearchHit>>;
}

use std::fmt;
use std::time::Duration;

use ainews_core::{Category, Error, NewsSearch, Result, SearchHit};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::utils::{extract_vqd, html_to_text};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; ainews/0.1)";

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    results: Vec<NewsResult>,
}

#[derive(Debug, Deserialize)]
struct NewsResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    date: Option<i64>,
}

impl From<NewsResult> for SearchHit {
    fn from(result: NewsResult) -> Self {
        SearchHit {
            title: html_to_text(&result.title),
            url: result.url.trim().to_string(),
            excerpt: html_to_text(&result.excerpt),
            source: result.source.trim().to_string(),
            published_at: result
                .date
                .filter(|secs| *secs > 0)
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        }
    }
}

/// Parses the body of DuckDuckGo's `news.js` endpoint.
pub fn parse_news_response(body: &str) -> Result<Vec<SearchHit>> {
    let response: NewsResponse = serde_json::from_str(body)?;
    Ok(response.results.into_iter().map(SearchHit::from).collect())
}

/// News search over DuckDuckGo, restricted to the past day.
pub struct DuckDuckGoSearch {
    client: Client,
    base_url: Url,
    region: String,
}

impl DuckDuckGoSearch {
    const BASE_URL: &'static str = "https://duckduckgo.com";

    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        let base_url = Url::parse(Self::BASE_URL)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", Self::BASE_URL, e)))?;
        Ok(Self {
            client,
            base_url,
            region: "wt-wt".to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(self)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn fetch_vqd(&self, query: &str) -> Result<String> {
        let html = self
            .client
            .get(self.endpoint("/")?)
            .query(&[("q", query), ("ia", "news")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        extract_vqd(&html)
            .ok_or_else(|| Error::Search(format!("No vqd token returned for query: {}", query)))
    }
}

impl fmt::Debug for DuckDuckGoSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuckDuckGoSearch")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url.as_str())
            .field("region", &self.region)
            .finish()
    }
}

#[async_trait]
impl NewsSearch for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    async fn search_news(&self, category: &Category) -> Result<Vec<SearchHit>> {
        let vqd = self.fetch_vqd(category.query).await?;
        tracing::debug!("Got vqd token for category {}", category.key);

        let body = self
            .client
            .get(self.endpoint("/news.js")?)
            .query(&[
                ("l", self.region.as_str()),
                ("o", "json"),
                ("noamp", "1"),
                ("q", category.query),
                ("vqd", vqd.as_str()),
                ("p", "-1"),
                ("df", "d"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_news_response(&body)
    }
}

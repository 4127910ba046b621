use std::collections::HashSet;
use std::sync::Arc;

use ainews_core::config::{
    MAX_DIGEST_ITEMS, NEWS_CATEGORIES, SEARCH_FUTURE_SKEW_MINUTES, SEARCH_WINDOW_HOURS,
};
use ainews_core::{Category, Digest, InferenceModel, NewsItem, NewsSearch, Result, SearchHit};
use chrono::{DateTime, Duration, Local, Utc};
use url::Url;

use crate::logging::Logger;

/// Searches every category, keeps hits from the last day and asks the model
/// for a short summary of each until the digest is full.
pub struct Curator {
    search: Arc<dyn NewsSearch>,
    model: Arc<dyn InferenceModel>,
    categories: Vec<Category>,
    max_items: usize,
    logger: Logger,
}

impl Curator {
    pub fn new(search: Arc<dyn NewsSearch>, model: Arc<dyn InferenceModel>) -> Self {
        Self {
            search,
            model,
            categories: NEWS_CATEGORIES.to_vec(),
            max_items: MAX_DIGEST_ITEMS,
            logger: Logger::new().with_prefix("[curator]"),
        }
    }

    pub async fn curate(&self, now: DateTime<Local>) -> Result<Digest> {
        let mut hits = Vec::new();
        for category in &self.categories {
            self.logger.info(&format!(
                "🔎 Searching {} for {} ({})",
                self.search.name(),
                category.key,
                category.query
            ));
            let found = self.search.search_news(category).await?;
            if found.is_empty() {
                self.logger.warn(&format!("No results for {}", category.key));
            } else {
                self.logger
                    .info(&format!("Found {} results for {}", found.len(), category.key));
            }
            hits.extend(found);
        }

        let candidates = select_candidates(hits, now.with_timezone(&Utc));
        self.logger.info(&format!(
            "📰 {} candidates published in the last {}h",
            candidates.len(),
            SEARCH_WINDOW_HOURS
        ));

        let mut items = Vec::with_capacity(self.max_items);
        for hit in candidates {
            if items.len() >= self.max_items {
                break;
            }
            let summary = self.model.summarize_hit(&hit).await?;
            let summary = summary.trim();
            if summary.is_empty() {
                self.logger
                    .debug(&format!("Dropping {}: no summary from {}", hit.url, self.model.name()));
                continue;
            }
            items.push(NewsItem {
                headline: hit.title,
                url: hit.url,
                summary: summary.to_string(),
            });
        }

        self.logger.info(&format!("✨ Digest ready with {} items", items.len()));
        Ok(Digest::new(now.date_naive(), items))
    }
}

/// True when `published_at` is inside the search window ending at `now`.
pub fn in_window(published_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let earliest = now - Duration::hours(SEARCH_WINDOW_HOURS);
    let latest = now + Duration::minutes(SEARCH_FUTURE_SKEW_MINUTES);
    published_at > earliest && published_at <= latest
}

/// Drops hits missing a headline, a web URL or an in-window date, removes
/// duplicate URLs and orders the rest newest first.
pub fn select_candidates(hits: Vec<SearchHit>, now: DateTime<Utc>) -> Vec<SearchHit> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<SearchHit> = hits
        .into_iter()
        .filter_map(|mut hit| {
            let title = hit.title.trim();
            if title.is_empty() {
                return None;
            }
            hit.title = title.to_string();

            let url = Url::parse(hit.url.trim()).ok()?;
            if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
                return None;
            }
            hit.url = url.to_string();

            match hit.published_at {
                Some(published_at) if in_window(published_at, now) => {}
                _ => return None,
            }

            seen.insert(hit.url.clone()).then_some(hit)
        })
        .collect();

    candidates.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn hit(title: &str, url: &str, hours_ago: Option<i64>) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            url: url.to_string(),
            excerpt: format!("{} happened.", title),
            source: "test".to_string(),
            published_at: hours_ago.map(|h| now() - Duration::hours(h)),
        }
    }

    #[test]
    fn test_in_window() {
        assert!(in_window(now() - Duration::hours(23), now()));
        assert!(in_window(now(), now()));
        assert!(in_window(now() + Duration::minutes(2), now()));
        assert!(!in_window(now() - Duration::hours(24), now()));
        assert!(!in_window(now() - Duration::hours(48), now()));
        assert!(!in_window(now() + Duration::hours(1), now()));
    }

    #[test]
    fn test_select_candidates_filters_and_orders() {
        let hits = vec![
            hit("Older", "https://example.com/older", Some(10)),
            hit("Stale", "https://example.com/stale", Some(30)),
            hit("Undated", "https://example.com/undated", None),
            hit("  ", "https://example.com/untitled", Some(1)),
            hit("No URL", "", Some(1)),
            hit("Bad URL", "javascript:alert(1)", Some(1)),
            hit("Newest", "https://example.com/newest", Some(1)),
            hit("Duplicate", "https://example.com/older", Some(2)),
        ];

        let candidates = select_candidates(hits, now());
        let titles: Vec<_> = candidates.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Older"]);
    }

    #[test]
    fn test_select_candidates_normalizes_urls() {
        let candidates = select_candidates(
            vec![
                hit(" Padded ", " https://Example.com/a ", Some(1)),
                hit("Same page", "https://example.com/a", Some(2)),
            ],
            now(),
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Padded");
        assert_eq!(candidates[0].url, "https://example.com/a");
    }
}

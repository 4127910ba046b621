use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DIGEST_TITLE, NO_UPDATES_MESSAGE};

/// A fixed topic searched on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub query: &'static str,
}

/// One raw result as returned by a search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub url: String,
    pub summary: String,
}

/// Date-stamped list of news items, rendered as Slack mrkdwn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub date: NaiveDate,
    pub items: Vec<NewsItem>,
}

impl Digest {
    pub fn new(date: NaiveDate, items: Vec<NewsItem>) -> Self {
        Self { date, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn header(&self) -> String {
        format!("*{}: {}*", DIGEST_TITLE, self.date.format("%Y-%m-%d"))
    }

    pub fn body(&self) -> String {
        if self.items.is_empty() {
            return NO_UPDATES_MESSAGE.to_string();
        }

        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "{}. *{}*\n{}\n<{}>",
                    i + 1,
                    escape_mrkdwn(&strip_emphasis(&item.headline)),
                    escape_mrkdwn(&item.summary),
                    escape_link_target(&item.url)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.header(), self.body())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// What the messaging backend reported for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub channel: String,
    pub timestamp: Option<String>,
}

/// Slack treats `&`, `<` and `>` as control characters in message text.
pub fn escape_mrkdwn(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Percent-encodes the characters that end or split a `<url|label>` link.
pub fn escape_link_target(url: &str) -> String {
    url.replace('|', "%7C")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

/// Removes mrkdwn emphasis markers so a headline cannot break its bold
/// wrapper.
pub fn strip_emphasis(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '_' | '~' | '`'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

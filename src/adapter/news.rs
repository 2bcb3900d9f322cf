//! DuckDuckGo-backed research lookup.
//!
//! Queries the Instant Answer API (JSON, no key required) and maps
//! related topics to research links. Results are advisory: callers treat
//! an empty list as "nothing found", never as a failure of the analysis.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::NetworkConfig;
use crate::domain::NewsItem;
use crate::error::Result;
use crate::exchange::NewsSource;

/// HTTP client for the DuckDuckGo Instant Answer API.
pub struct DuckDuckGoClient {
    http: Client,
    base_url: Url,
}

impl DuckDuckGoClient {
    /// Create a client from the network configuration.
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.news_url)?,
        })
    }
}

#[async_trait]
impl NewsSource for DuckDuckGoClient {
    async fn search(&self, query: &str, max_items: usize) -> Result<Vec<NewsItem>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("no_html", "1");

        debug!(url = %url, "Searching research links");

        let answer: InstantAnswer = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = answer.into_news_items(max_items);
        debug!(count = items.len(), "Found research links");

        Ok(items)
    }
}

/// Instant Answer response; only the related-topic tree is used.
#[derive(Debug, serde::Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// Related topics arrive either as leaf results or as named groups of
/// leaf results; groups are flattened one level deep.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum RelatedTopic {
    // The required fields discriminate the variants: groups carry
    // "Topics", leaves carry "Text"/"FirstURL".
    Group {
        #[serde(rename = "Topics")]
        topics: Vec<TopicResult>,
    },
    Leaf(TopicResult),
    // Entries with neither shape are ignored rather than failing the
    // whole response.
    Other(serde_json::Value),
}

#[derive(Debug, serde::Deserialize)]
struct TopicResult {
    #[serde(rename = "Text")]
    text: String,
    #[serde(rename = "FirstURL")]
    first_url: String,
}

impl InstantAnswer {
    fn into_news_items(self, max_items: usize) -> Vec<NewsItem> {
        self.related_topics
            .into_iter()
            .flat_map(|topic| match topic {
                RelatedTopic::Leaf(result) => vec![result],
                RelatedTopic::Group { topics } => topics,
                RelatedTopic::Other(_) => Vec::new(),
            })
            .filter(|result| !result.text.is_empty() && !result.first_url.is_empty())
            .take(max_items)
            .map(|result| {
                let source = Url::parse(&result.first_url)
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_string))
                    .unwrap_or_else(|| "duckduckgo.com".to_string());
                NewsItem::new(result.text, result.first_url, source)
            })
            .collect()
    }
}

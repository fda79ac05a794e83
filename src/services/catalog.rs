// src/services/catalog.rs

//! Catalog query service.
//!
//! Builds a search request against the arXiv Atom API and converts the
//! response entries into [`Article`] records, preserving feed order
//! (newest submissions first, per the requested sort).

use std::sync::Arc;

use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Article, Config};
use crate::utils::http::create_async_client;

/// Service for querying the article catalog.
pub struct CatalogClient {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_async_client(&config.fetcher)?;
        Ok(Self { config, client })
    }

    /// Build the catalog query URL.
    ///
    /// Filters by category, caps the result count, and requests
    /// submission-date-descending order. The configured keywords play no
    /// role here; they only drive downstream highlighting.
    pub fn query_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.config.fetcher.base_url)?;
        url.query_pairs_mut()
            .append_pair(
                "search_query",
                &format!("cat:{}", self.config.search.category),
            )
            .append_pair("start", "0")
            .append_pair("max_results", &self.config.search.max_results.to_string())
            .append_pair("sortBy", "submittedDate")
            .append_pair("sortOrder", "descending");
        Ok(url)
    }

    /// Fetch candidate articles from the catalog.
    ///
    /// Any network or parse failure propagates and aborts the run.
    pub async fn fetch(&self) -> Result<Vec<Article>> {
        let url = self.query_url()?;
        log::info!("Querying catalog: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::catalog(
                url.as_str(),
                format!("unexpected HTTP status {status}"),
            ));
        }

        let bytes = response.bytes().await?;
        parse_articles(&bytes)
    }
}

/// Parse an Atom payload into articles, in feed order.
pub fn parse_articles(bytes: &[u8]) -> Result<Vec<Article>> {
    let feed = feed_rs::parser::parse(bytes)?;
    Ok(feed.entries.into_iter().map(entry_to_article).collect())
}

fn entry_to_article(entry: feed_rs::model::Entry) -> Article {
    Article {
        id: entry.id,
        title: entry
            .title
            .map(|t| collapse_whitespace(&t.content))
            .unwrap_or_default(),
        summary: entry
            .summary
            .map(|s| collapse_whitespace(&s.content))
            .unwrap_or_default(),
    }
}

// Feed titles and abstracts arrive with hard-wrapped lines.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// src/pipeline/run.rs

//! Digest pipeline orchestration.
//!
//! One run: ensure the output directory, open the store, query the
//! catalog, select and persist articles not seen before, render the
//! batch, and write today's digest file if it does not already exist.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::models::{Article, Config, DigestEntry, OutputConfig};
use crate::pipeline::highlight::highlight;
use crate::pipeline::render::render_digest;
use crate::services::CatalogClient;
use crate::storage::{ArticleStore, SqliteStore};

/// Summary of a digest run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Candidates returned by the catalog
    pub fetched: usize,
    /// Candidates skipped as already processed
    pub skipped: usize,
    /// Articles newly inserted and rendered
    pub selected: usize,
    /// Path of the written digest, None if today's file already existed
    pub output_path: Option<PathBuf>,
}

/// Run the digest pipeline once.
pub async fn run_digest(config: &Config) -> Result<RunOutcome> {
    ensure_output_dir(Path::new(&config.output.dir))?;

    let store = SqliteStore::open(config.store_path()).await?;
    let catalog = CatalogClient::new(Arc::new(config.clone()))?;

    let candidates = catalog.fetch().await?;
    log::info!("Catalog returned {} candidates", candidates.len());

    let entries = select_new(&store, &candidates, &config.keywords).await?;

    let html = render_digest(&config.search.category, &entries);
    let path = digest_path(&config.output, Local::now().date_naive());
    let written = write_digest(&path, &html)?;

    if written {
        log::info!("Digest written to {}", path.display());
    } else {
        log::warn!("Digest already exists: {}. Skipping write.", path.display());
    }

    let outcome = RunOutcome {
        fetched: candidates.len(),
        skipped: candidates.len() - entries.len(),
        selected: entries.len(),
        output_path: written.then_some(path),
    };

    log::info!(
        "Run complete: {} fetched, {} skipped, {} new",
        outcome.fetched,
        outcome.skipped,
        outcome.selected
    );

    Ok(outcome)
}

/// Select candidates not yet in the store, in catalog order.
///
/// Each selected article is inserted with its raw title and summary;
/// the returned digest entries carry the highlighted copies.
pub async fn select_new(
    store: &dyn ArticleStore,
    candidates: &[Article],
    keywords: &[String],
) -> Result<Vec<DigestEntry>> {
    let mut entries = Vec::new();

    for article in candidates {
        if store.exists(&article.id).await? {
            log::debug!("Skipping known article {}", article.id);
            continue;
        }

        let entry = DigestEntry {
            title: highlight(&article.title, keywords),
            summary: highlight(&article.summary, keywords),
            link: article.id.clone(),
        };
        store.insert(article).await?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Digest file path for the given run date.
pub fn digest_path(output: &OutputConfig, date: NaiveDate) -> PathBuf {
    Path::new(&output.dir).join(format!(
        "{}_{}.html",
        output.file_prefix,
        date.format("%Y_%m_%d")
    ))
}

/// Write the digest unless a file already exists at the path.
///
/// Returns whether the file was written. An existing file is never
/// touched; that is the whole conflict policy.
pub fn write_digest(path: &Path, html: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, html)?;
    Ok(true)
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        log::info!("Output directory already exists: {}", dir.display());
    } else {
        fs::create_dir_all(dir)?;
        log::info!("Output directory created: {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article(id: &str, title: &str, summary: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }

    #[tokio::test]
    async fn fresh_store_selects_all_in_catalog_order() {
        let store = SqliteStore::in_memory().await.unwrap();
        let candidates = vec![
            article("http://arxiv.org/abs/2608.00001v1", "First", "s1"),
            article("http://arxiv.org/abs/2608.00002v1", "Second", "s2"),
            article("http://arxiv.org/abs/2608.00003v1", "Third", "s3"),
        ];

        let entries = select_new(&store, &candidates, &[]).await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].link, candidates[0].id);
        assert_eq!(entries[1].link, candidates[1].id);
        assert_eq!(entries[2].link, candidates[2].id);
        for candidate in &candidates {
            assert!(store.exists(&candidate.id).await.unwrap());
        }
    }

    #[tokio::test]
    async fn known_ids_are_skipped() {
        let store = SqliteStore::in_memory().await.unwrap();
        let known = article("http://arxiv.org/abs/2608.00001v1", "X", "sx");
        store.insert(&known).await.unwrap();

        let fresh = article("http://arxiv.org/abs/2608.00002v1", "Y", "sy");
        let entries = select_new(&store, &[known.clone(), fresh.clone()], &[])
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].link, fresh.id);
    }

    #[tokio::test]
    async fn second_pass_selects_nothing() {
        let store = SqliteStore::in_memory().await.unwrap();
        let candidates = vec![
            article("http://arxiv.org/abs/2608.00001v1", "A", "s"),
            article("http://arxiv.org/abs/2608.00002v1", "B", "s"),
        ];

        let first = select_new(&store, &candidates, &[]).await.unwrap();
        assert_eq!(first.len(), 2);

        let second = select_new(&store, &candidates, &[]).await.unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn entries_are_highlighted_store_keeps_raw_text() {
        let store = SqliteStore::in_memory().await.unwrap();
        let candidates = vec![article(
            "http://arxiv.org/abs/2608.00001v1",
            "A photon study",
            "About photons.",
        )];
        let keywords = vec!["photon".to_string()];

        let entries = select_new(&store, &candidates, &keywords).await.unwrap();

        assert!(entries[0].title.contains("<span class=\"highlight\">"));
        // The insert received the untouched Article, not the entry.
        assert_eq!(candidates[0].title, "A photon study");
        assert!(store.exists(&candidates[0].id).await.unwrap());
    }

    #[test]
    fn digest_path_combines_prefix_and_date() {
        let output = OutputConfig {
            dir: "arxiv".to_string(),
            file_prefix: "arxiv".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        assert_eq!(
            digest_path(&output, date),
            Path::new("arxiv").join("arxiv_2026_08_06.html")
        );
    }

    #[test]
    fn existing_digest_is_left_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("arxiv_2026_08_06.html");

        assert!(write_digest(&path, "first run").unwrap());
        let before = fs::read(&path).unwrap();

        assert!(!write_digest(&path, "second run").unwrap());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn ensure_output_dir_creates_and_tolerates_existing() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("arxiv");

        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_output_dir(&dir).unwrap();
    }
}

//! Storage abstraction for processed-article persistence.
//!
//! The store is the deduplication memory of the pipeline: one row per
//! article id, insert-only. Rows are never updated or deleted, so a run
//! that sees a known id simply skips it.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Article;

// Re-export for convenience
pub use sqlite::SqliteStore;

/// Trait for article store backends.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Check whether an article id has been processed before.
    async fn exists(&self, id: &str) -> Result<bool>;

    /// Insert a newly processed article.
    ///
    /// Callers must check `exists` first; inserting a duplicate id
    /// violates the primary key and surfaces as a store error.
    async fn insert(&self, article: &Article) -> Result<()>;
}

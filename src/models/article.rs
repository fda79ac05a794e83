//! Article data structures.

use serde::{Deserialize, Serialize};

/// An article fetched from the catalog.
///
/// The `id` is the catalog's own abstract URL and serves as the primary
/// key in the store. Title and summary are kept exactly as fetched;
/// highlighting only happens on the rendered copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Unique catalog identifier (abstract URL)
    pub id: String,

    /// Article title
    pub title: String,

    /// Article abstract
    pub summary: String,
}

/// One entry of the rendered digest.
///
/// Title and summary carry highlight markup; `link` is the source id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    /// Highlighted title (link text)
    pub title: String,

    /// Highlighted summary (body)
    pub summary: String,

    /// Link target, the article's catalog id
    pub link: String,
}

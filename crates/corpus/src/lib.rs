//! # Silo Audit Corpus
//!
//! Turns a content root into the list of items an audit scores.
//!
//! ## Pipeline
//!
//! ```text
//! Content root
//!     │
//!     ├──> ContentLister (excluded names, hub patterns, page files)
//!     │      └─> ContentEntry[] in file-name order
//!     │
//!     └──> TitleExtractor (metadata field → heading → slug)
//!            └─> ContentItem[]
//! ```
//!
//! An unreadable page never drops an item: its title falls back to the
//! humanized slug so every listed entry reaches the assigner.

mod config;
mod error;
mod metadata;
mod scanner;
mod types;

pub use config::ListingConfig;
pub use error::{CorpusError, Result};
pub use metadata::{first_heading, humanize_slug, metadata_title, TitleExtractor, TitleStrategy};
pub use scanner::ContentLister;
pub use types::{ContentEntry, ContentItem, TitleSource};

/// List `root` and extract a title for every entry.
pub fn load_items(
    root: impl AsRef<std::path::Path>,
    config: &ListingConfig,
) -> Result<Vec<ContentItem>> {
    let entries = ContentLister::new(root, config)?.list()?;
    let extractor = TitleExtractor::default();
    Ok(entries
        .iter()
        .map(|entry| extractor.read_item(entry))
        .collect())
}

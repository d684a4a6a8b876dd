use crate::config::ListingConfig;
use crate::error::{CorpusError, Result};
use crate::types::ContentEntry;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the content directories directly under a content root
pub struct ContentLister {
    root: PathBuf,
    excluded: Vec<String>,
    hub_patterns: Vec<Regex>,
    page_files: Vec<String>,
}

impl ContentLister {
    pub fn new(root: impl AsRef<Path>, config: &ListingConfig) -> Result<Self> {
        let hub_patterns = config
            .hub_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| CorpusError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: err.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            excluded: config.excluded.clone(),
            hub_patterns,
            page_files: config.page_files.clone(),
        })
    }

    /// Content entries in file-name order
    pub fn list(&self) -> Result<Vec<ContentEntry>> {
        if !self.root.is_dir() {
            return Err(CorpusError::InvalidRoot(self.root.clone()));
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Failed to read entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                log::debug!("Skipping non-directory {}", entry.path().display());
                continue;
            }

            let Some(slug) = entry.file_name().to_str() else {
                log::warn!("Skipping non UTF-8 directory {}", entry.path().display());
                continue;
            };

            if self.is_excluded(slug) {
                log::debug!("Skipping excluded directory {slug}");
                continue;
            }
            if self.is_hub(slug) {
                log::debug!("Skipping hub page {slug}");
                continue;
            }

            let Some(page_file) = self.find_page_file(entry.path()) else {
                log::debug!("Skipping {slug}: no page file");
                continue;
            };

            entries.push(ContentEntry {
                slug: slug.to_string(),
                page_file,
            });
        }

        log::info!(
            "Found {} content items under {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|excluded| excluded == name)
    }

    fn is_hub(&self, name: &str) -> bool {
        self.hub_patterns.iter().any(|pattern| pattern.is_match(name))
    }

    fn find_page_file(&self, dir: &Path) -> Option<PathBuf> {
        self.page_files
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

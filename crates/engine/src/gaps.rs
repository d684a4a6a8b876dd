use crate::config::{GapConfig, GapMode};
use serde::Serialize;
use silo_audit_corpus::ContentItem;
use silo_audit_taxonomy::Taxonomy;

/// A required node no content title satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapRecord {
    pub silo: String,
    pub cluster: String,
    pub node: String,
}

/// Missing nodes of one silo, in taxonomy order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiloGaps {
    pub silo: String,
    pub missing: Vec<GapRecord>,
}

/// Checks required nodes against every content title, regardless of assignment
#[derive(Debug, Clone, Default)]
pub struct MissingNodeDetector {
    config: GapConfig,
}

impl MissingNodeDetector {
    pub fn new(config: GapConfig) -> Self {
        Self { config }
    }

    /// One entry per silo, including silos with nothing missing
    #[must_use]
    pub fn detect(&self, taxonomy: &Taxonomy, items: &[ContentItem]) -> Vec<SiloGaps> {
        let titles: Vec<String> = items.iter().map(|item| item.title.to_lowercase()).collect();

        taxonomy
            .silos()
            .iter()
            .map(|silo| {
                let missing: Vec<GapRecord> = silo
                    .clusters
                    .iter()
                    .flat_map(|cluster| {
                        cluster
                            .required_nodes
                            .iter()
                            .map(move |node| (cluster.name.as_str(), node))
                    })
                    .filter(|(_, node)| !self.is_met(node, &titles))
                    .map(|(cluster, node)| GapRecord {
                        silo: silo.name.clone(),
                        cluster: cluster.to_string(),
                        node: node.clone(),
                    })
                    .collect();

                if !missing.is_empty() {
                    log::info!("{} missing nodes in silo {}", missing.len(), silo.name);
                }
                SiloGaps {
                    silo: silo.name.clone(),
                    missing,
                }
            })
            .collect()
    }

    /// Whether any of the lowercased `titles` covers `node`
    #[must_use]
    pub fn is_met(&self, node: &str, titles: &[String]) -> bool {
        let node = node.to_lowercase();
        titles.iter().any(|title| self.satisfies(&node, title))
    }

    fn satisfies(&self, node: &str, title: &str) -> bool {
        if title.contains(node) {
            return true;
        }
        match self.config.mode {
            GapMode::Strict => false,
            // Short connector words are ignored; the rest must each appear in the title.
            GapMode::Lenient => node.split_whitespace().all(|word| {
                word.chars().count() <= self.config.short_word_chars || title.contains(word)
            }),
        }
    }
}

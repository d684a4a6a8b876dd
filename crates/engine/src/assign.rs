use crate::config::ScoringConfig;
use crate::scoring::MatchScorer;
use serde::Serialize;
use silo_audit_corpus::ContentItem;
use silo_audit_taxonomy::{Silo, Taxonomy};

/// Best cluster of one silo for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiloMatch {
    pub silo: String,
    /// `None` only for a silo without clusters
    pub cluster: Option<String>,
    pub score: f64,
}

/// Outcome for one content item; exactly one per item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assignment {
    Assigned {
        item: ContentItem,
        silo: String,
        cluster: String,
        score: f64,
        /// Per-silo best matches, in taxonomy order
        matches: Vec<SiloMatch>,
    },
    Orphaned {
        item: ContentItem,
        matches: Vec<SiloMatch>,
    },
}

impl Assignment {
    #[must_use]
    pub fn item(&self) -> &ContentItem {
        match self {
            Self::Assigned { item, .. } | Self::Orphaned { item, .. } => item,
        }
    }

    #[must_use]
    pub fn matches(&self) -> &[SiloMatch] {
        match self {
            Self::Assigned { matches, .. } | Self::Orphaned { matches, .. } => matches,
        }
    }

    /// Assigned silo, if any
    #[must_use]
    pub fn silo(&self) -> Option<&str> {
        match self {
            Self::Assigned { silo, .. } => Some(silo),
            Self::Orphaned { .. } => None,
        }
    }

    #[must_use]
    pub fn is_orphaned(&self) -> bool {
        matches!(self, Self::Orphaned { .. })
    }

    /// Top score reported for `silo`, zero when the silo is unknown
    #[must_use]
    pub fn score_for(&self, silo: &str) -> f64 {
        self.matches()
            .iter()
            .find(|m| m.silo == silo)
            .map_or(0.0, |m| m.score)
    }
}

/// Assigns content items to the best-scoring silo and cluster
pub struct SiloAssigner<'a> {
    taxonomy: &'a Taxonomy,
    scorer: MatchScorer,
    threshold: f64,
}

impl<'a> SiloAssigner<'a> {
    pub fn new(taxonomy: &'a Taxonomy, config: &ScoringConfig) -> Self {
        Self {
            taxonomy,
            scorer: MatchScorer::new(config.clone()),
            threshold: config.threshold,
        }
    }

    /// Highest-scoring cluster of `silo`; ties keep the first declared
    #[must_use]
    pub fn best_match(&self, silo: &Silo, search_text: &str) -> SiloMatch {
        let mut best = SiloMatch {
            silo: silo.name.clone(),
            cluster: None,
            score: 0.0,
        };

        for cluster in &silo.clusters {
            let score = self.scorer.score(search_text, &cluster.keywords);
            if best.cluster.is_none() || score > best.score {
                best.cluster = Some(cluster.name.clone());
                best.score = score;
            }
        }

        best
    }

    /// Pick the highest-scoring silo, first declared on ties.
    ///
    /// Assigned when that score reaches the threshold, otherwise orphaned
    /// with every silo's score kept for the report.
    #[must_use]
    pub fn assign(&self, item: &ContentItem) -> Assignment {
        let search_text = item.search_text();
        let matches: Vec<SiloMatch> = self
            .taxonomy
            .silos()
            .iter()
            .map(|silo| self.best_match(silo, &search_text))
            .collect();

        let mut winner: Option<&SiloMatch> = None;
        for candidate in &matches {
            if winner.map_or(true, |best| candidate.score > best.score) {
                winner = Some(candidate);
            }
        }

        let assigned = winner
            .filter(|best| best.score >= self.threshold)
            .and_then(|best| {
                best.cluster
                    .clone()
                    .map(|cluster| (best.silo.clone(), cluster, best.score))
            });

        match assigned {
            Some((silo, cluster, score)) => {
                log::debug!("{} -> {silo}/{cluster} ({score:.1})", item.slug);
                Assignment::Assigned {
                    item: item.clone(),
                    silo,
                    cluster,
                    score,
                    matches,
                }
            }
            None => {
                log::debug!("{} orphaned", item.slug);
                Assignment::Orphaned {
                    item: item.clone(),
                    matches,
                }
            }
        }
    }

    /// One assignment per item, in item order
    #[must_use]
    pub fn assign_all(&self, items: &[ContentItem]) -> Vec<Assignment> {
        items.iter().map(|item| self.assign(item)).collect()
    }
}

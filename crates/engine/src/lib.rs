//! # Silo Audit Engine
//!
//! Fuses a taxonomy with a content corpus and reports where they disagree.
//!
//! ## Pipeline
//!
//! ```text
//! Taxonomy ──┐
//!            ├──> SiloAssigner (MatchScorer per cluster, best cluster per silo)
//! Content ───┤      └─> Assignment: (silo, cluster, score) | orphaned
//!            │
//!            └──> MissingNodeDetector (required nodes vs. every title)
//!                   └─> GapRecord[] per silo
//!
//! Assignments + gaps ──> AuditReport ──> markdown | json
//! ```
//!
//! Scoring is literal: a keyword contributes when its full text or one of its
//! longer words appears in the item's slug or title. There is no stemming and
//! no semantic similarity.
//!
//! ## Example
//!
//! ```
//! use silo_audit_corpus::{ContentItem, TitleSource};
//! use silo_audit_engine::{run_audit, AuditConfig};
//! use silo_audit_taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::from_json_str(r#"{
//!     "commercial": {
//!         "Medical": {
//!             "keywords": ["medical facility", "clean room"],
//!             "required_nodes": ["Clean Room Construction Standards"]
//!         }
//!     }
//! }"#).unwrap();
//! let items = vec![ContentItem::new(
//!     "clean-room-construction-standards",
//!     "Clean Room Construction Standards",
//!     TitleSource::Metadata,
//! )];
//!
//! let report = run_audit(&taxonomy, &items, &AuditConfig::default());
//! assert_eq!(report.summary.orphaned, 0);
//! assert!(report.render_markdown().contains("(score: 100.0)"));
//! ```

mod assign;
mod config;
mod error;
mod gaps;
mod pipeline;
mod report;
mod scoring;

pub use assign::{Assignment, SiloAssigner, SiloMatch};
pub use config::{AuditConfig, GapConfig, GapMode, ScoringConfig};
pub use error::{EngineError, Result};
pub use gaps::{GapRecord, MissingNodeDetector, SiloGaps};
pub use pipeline::{audit_paths, run_audit, write_report};
pub use report::{
    AssignedRow, AuditReport, ClusterGroup, OrphanRow, ReportFormat, SiloCount, SiloSection,
    Summary,
};
pub use scoring::MatchScorer;

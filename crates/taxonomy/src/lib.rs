//! # Silo Audit Taxonomy
//!
//! The topical structure content is audited against.
//!
//! ```text
//! Taxonomy
//!     ├──> Silo "commercial"
//!     │      ├─> Cluster "Medical"     { keywords, required_nodes }
//!     │      └─> Cluster "Retail"      { keywords, required_nodes }
//!     └──> Silo "residential"
//!            └─> Cluster "Pet-Friendly" { keywords, required_nodes }
//! ```
//!
//! Declaration order of silos and clusters is part of the contract: the
//! assigner breaks ties by it and the report lists clusters in it.
//!
//! ## Example
//!
//! ```
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
//!
//! assert_eq!(taxonomy.silo_names(), vec!["commercial"]);
//! ```

mod error;
mod loader;
mod types;

pub use error::{Result, TaxonomyError};
pub use types::{Cluster, Silo, Taxonomy};

use crate::assign::SiloAssigner;
use crate::config::AuditConfig;
use crate::error::{EngineError, Result};
use crate::gaps::MissingNodeDetector;
use crate::report::AuditReport;
use silo_audit_corpus::ContentItem;
use silo_audit_taxonomy::Taxonomy;
use std::fs;
use std::path::Path;

/// Assign every item, detect gaps and aggregate the report
#[must_use]
pub fn run_audit(taxonomy: &Taxonomy, items: &[ContentItem], config: &AuditConfig) -> AuditReport {
    let assignments = SiloAssigner::new(taxonomy, &config.scoring).assign_all(items);
    let gaps = MissingNodeDetector::new(config.gaps.clone()).detect(taxonomy, items);
    let report = AuditReport::build(taxonomy, &assignments, gaps);

    log::info!(
        "Audited {} items: {} orphaned, {} missing nodes",
        report.summary.total_items,
        report.summary.orphaned,
        report.summary.missing.iter().map(|m| m.count).sum::<usize>()
    );
    report
}

/// Load the taxonomy, then the content, then audit.
///
/// The taxonomy is loaded first so a broken taxonomy aborts before any content is read.
pub fn audit_paths(
    taxonomy_path: impl AsRef<Path>,
    content_root: impl AsRef<Path>,
    config: &AuditConfig,
) -> Result<AuditReport> {
    let taxonomy = Taxonomy::load(taxonomy_path)?;
    let items = silo_audit_corpus::load_items(content_root, &config.listing)?;
    Ok(run_audit(&taxonomy, &items, config))
}

pub fn write_report(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| EngineError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote report {}", path.display());
    Ok(())
}

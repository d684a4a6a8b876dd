use crate::assign::{Assignment, SiloMatch};
use crate::error::Result;
use crate::gaps::SiloGaps;
use serde::Serialize;
use silo_audit_taxonomy::Taxonomy;

const NONE_FOUND: &str = "_None found._\n";
const GAP_PRIORITY: &str = "High";

/// Output encoding of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn render(self, report: &AuditReport) -> Result<String> {
        match self {
            Self::Markdown => Ok(report.render_markdown()),
            Self::Json => report.to_json(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiloCount {
    pub silo: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_items: usize,
    pub assigned: Vec<SiloCount>,
    pub orphaned: usize,
    pub missing: Vec<SiloCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrphanRow {
    pub title: String,
    pub path: String,
    pub scores: Vec<SiloMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedRow {
    pub title: String,
    pub path: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterGroup {
    pub cluster: String,
    pub items: Vec<AssignedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiloSection {
    pub silo: String,
    pub clusters: Vec<ClusterGroup>,
}

/// Everything one audit run found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub summary: Summary,
    pub orphans: Vec<OrphanRow>,
    pub gaps: Vec<SiloGaps>,
    pub silos: Vec<SiloSection>,
}

impl AuditReport {
    /// Aggregate assignments and gaps.
    ///
    /// Clusters are listed in the order first met while walking
    /// `assignments`; items keep assignment order within a cluster.
    pub fn build(taxonomy: &Taxonomy, assignments: &[Assignment], gaps: Vec<SiloGaps>) -> Self {
        let mut silos: Vec<SiloSection> = taxonomy
            .silos()
            .iter()
            .map(|silo| SiloSection {
                silo: silo.name.clone(),
                clusters: Vec::new(),
            })
            .collect();
        let mut orphans = Vec::new();

        for assignment in assignments {
            match assignment {
                Assignment::Assigned {
                    item,
                    silo,
                    cluster,
                    score,
                    ..
                } => {
                    let index = match silos.iter().position(|s| &s.silo == silo) {
                        Some(index) => index,
                        None => {
                            log::warn!("{} assigned to undeclared silo `{silo}`", item.slug);
                            silos.push(SiloSection {
                                silo: silo.clone(),
                                clusters: Vec::new(),
                            });
                            silos.len() - 1
                        }
                    };
                    let section = &mut silos[index];
                    let row = AssignedRow {
                        title: item.title.clone(),
                        path: item.path.clone(),
                        score: *score,
                    };
                    match section.clusters.iter_mut().find(|g| &g.cluster == cluster) {
                        Some(group) => group.items.push(row),
                        None => section.clusters.push(ClusterGroup {
                            cluster: cluster.clone(),
                            items: vec![row],
                        }),
                    }
                }
                Assignment::Orphaned { item, matches } => orphans.push(OrphanRow {
                    title: item.title.clone(),
                    path: item.path.clone(),
                    scores: matches.clone(),
                }),
            }
        }

        let summary = Summary {
            total_items: assignments.len(),
            assigned: silos
                .iter()
                .map(|section| SiloCount {
                    silo: section.silo.clone(),
                    count: section.clusters.iter().map(|g| g.items.len()).sum(),
                })
                .collect(),
            orphaned: orphans.len(),
            missing: gaps
                .iter()
                .map(|g| SiloCount {
                    silo: g.silo.clone(),
                    count: g.missing.len(),
                })
                .collect(),
        };

        Self {
            summary,
            orphans,
            gaps,
            silos,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Summary, orphans, missing nodes per silo, then assignments per silo
    #[must_use]
    pub fn render_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Silo audit report\n\n");

        md.push_str("## Summary\n\n");
        md.push_str("| metric | count |\n");
        md.push_str("|---|---:|\n");
        md.push_str(&format!("| Content items | {} |\n", self.summary.total_items));
        for count in &self.summary.assigned {
            md.push_str(&format!(
                "| Assigned: {} | {} |\n",
                escape_cell(&count.silo),
                count.count
            ));
        }
        md.push_str(&format!("| Orphaned | {} |\n", self.summary.orphaned));
        for count in &self.summary.missing {
            md.push_str(&format!(
                "| Missing nodes: {} | {} |\n",
                escape_cell(&count.silo),
                count.count
            ));
        }
        md.push('\n');

        md.push_str("## Orphaned content\n\n");
        if self.orphans.is_empty() {
            md.push_str(NONE_FOUND);
        } else {
            md.push_str("| title | path |");
            for section in &self.silos {
                md.push_str(&format!(" {} score |", escape_cell(&section.silo)));
            }
            md.push_str("\n|---|---|");
            md.push_str(&"---:|".repeat(self.silos.len()));
            md.push('\n');
            for orphan in &self.orphans {
                md.push_str(&format!(
                    "| {} | `{}` |",
                    escape_cell(&orphan.title),
                    orphan.path
                ));
                for section in &self.silos {
                    let score = orphan
                        .scores
                        .iter()
                        .find(|m| m.silo == section.silo)
                        .map_or(0.0, |m| m.score);
                    md.push_str(&format!(" {} |", format_score(score)));
                }
                md.push('\n');
            }
        }
        md.push('\n');

        for silo_gaps in &self.gaps {
            md.push_str(&format!("## Missing nodes: {}\n\n", silo_gaps.silo));
            if silo_gaps.missing.is_empty() {
                md.push_str(NONE_FOUND);
            } else {
                md.push_str("| node | cluster | priority |\n");
                md.push_str("|---|---|---|\n");
                for gap in &silo_gaps.missing {
                    md.push_str(&format!(
                        "| {} | {} | {GAP_PRIORITY} |\n",
                        escape_cell(&gap.node),
                        escape_cell(&gap.cluster)
                    ));
                }
            }
            md.push('\n');
        }

        for section in &self.silos {
            md.push_str(&format!("## Assigned content: {}\n\n", section.silo));
            if section.clusters.is_empty() {
                md.push_str(NONE_FOUND);
                md.push('\n');
                continue;
            }
            for group in &section.clusters {
                md.push_str(&format!("### {}\n\n", group.cluster));
                for row in &group.items {
                    md.push_str(&format!(
                        "- [{}]({}) (score: {})\n",
                        escape_link_text(&row.title),
                        escape_link_target(&row.path),
                        format_score(row.score)
                    ));
                }
                md.push('\n');
            }
        }

        md
    }
}

fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

fn escape_link_text(value: &str) -> String {
    value.replace('[', "\\[").replace(']', "\\]")
}

fn escape_link_target(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '\n' => out.push_str("%0A"),
            _ => out.push(ch),
        }
    }
    out
}

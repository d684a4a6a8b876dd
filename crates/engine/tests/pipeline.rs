use silo_audit_engine::{audit_paths, write_report, AuditConfig, EngineError, ReportFormat};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const TAXONOMY: &str = r#"{
    "commercial": {
        "Medical": {
            "keywords": ["medical facility", "clean room"],
            "required_nodes": ["Clean Room Construction Standards", "Medical Gas Systems"]
        },
        "Retail": {
            "keywords": ["retail buildout", "storefront"],
            "required_nodes": ["Storefront Design"]
        }
    },
    "residential": {
        "Pet-Friendly": {
            "keywords": ["pet friendly", "dog run"],
            "required_nodes": ["Pet-Friendly Home Designs"]
        }
    }
}"#;

fn page(root: &Path, slug: &str, body: &str) {
    let dir = root.join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("page.tsx"), body).unwrap();
}

fn setup() -> TempDir {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("taxonomy.json"), TAXONOMY).unwrap();

    let app = root.join("app");
    page(
        &app,
        "clean-room-construction-standards",
        r#"export const metadata = { title: "Clean Room Construction Standards | Acme" };"#,
    );
    page(
        &app,
        "pet-friendly-home-designs-in-tampa",
        r#"<section><h1 className="hero">Pet-Friendly Home Designs in Tampa</h1></section>"#,
    );
    page(&app, "zoning-basics", "# Zoning Basics\n");
    // no title anywhere: falls back to the slug
    page(
        &app,
        "storefront-design",
        "export default function Page() { return null; }",
    );
    // hub and excluded directories never reach the assigner
    page(&app, "services", "<h1>Clean Room Services</h1>");
    page(&app, "components", "<h1>Clean Room Button</h1>");
    temp
}

fn audit(root: &Path) -> silo_audit_engine::AuditReport {
    audit_paths(
        root.join("taxonomy.json"),
        root.join("app"),
        &AuditConfig::default(),
    )
    .unwrap()
}

#[test]
fn every_item_lands_in_exactly_one_bucket() {
    let temp = setup();
    let report = audit(temp.path());

    let assigned: usize = report.summary.assigned.iter().map(|c| c.count).sum();
    assert_eq!(report.summary.total_items, 4);
    assert_eq!(assigned + report.summary.orphaned, report.summary.total_items);

    let mut paths: Vec<&str> = report
        .silos
        .iter()
        .flat_map(|s| &s.clusters)
        .flat_map(|g| &g.items)
        .map(|row| row.path.as_str())
        .chain(report.orphans.iter().map(|o| o.path.as_str()))
        .collect();
    paths.sort_unstable();
    let before = paths.len();
    paths.dedup();
    assert_eq!(before, paths.len(), "an item was reported twice");
}

#[test]
fn scenarios_from_a_real_corpus() {
    let temp = setup();
    let report = audit(temp.path());

    let commercial = &report.silos[0];
    assert_eq!(commercial.clusters[0].cluster, "Medical");
    assert_eq!(commercial.clusters[0].items[0].score, 100.0);

    assert_eq!(commercial.clusters[1].cluster, "Retail");
    assert_eq!(commercial.clusters[1].items[0].title, "storefront design");

    let residential = &report.silos[1];
    assert_eq!(
        residential.clusters[0].items[0].title,
        "Pet-Friendly Home Designs in Tampa"
    );

    assert_eq!(report.orphans.len(), 1);
    assert_eq!(report.orphans[0].title, "Zoning Basics");

    let missing: Vec<&str> = report
        .gaps
        .iter()
        .flat_map(|g| &g.missing)
        .map(|g| g.node.as_str())
        .collect();
    assert_eq!(missing, vec!["Medical Gas Systems"]);
}

#[test]
fn reports_are_byte_identical_across_runs() {
    let temp = setup();
    let first = ReportFormat::Markdown.render(&audit(temp.path())).unwrap();
    let second = ReportFormat::Markdown.render(&audit(temp.path())).unwrap();
    assert_eq!(first, second);

    let out = temp.path().join("SILO_AUDIT.md");
    write_report(&out, &first).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), first);
}

#[test]
fn missing_taxonomy_is_fatal_before_content() {
    let temp = tempdir().unwrap();
    // content root is missing too; the taxonomy error must win
    let err = audit_paths(
        temp.path().join("taxonomy.json"),
        temp.path().join("app"),
        &AuditConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::Taxonomy(_)));
}

#[test]
fn unwritable_report_path_is_fatal() {
    let temp = tempdir().unwrap();
    let err = write_report(temp.path().join("no/such/dir/report.md"), "x").unwrap_err();
    assert!(matches!(err, EngineError::ReportWrite { .. }));
}

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use silo_audit_engine::{
    audit_paths, write_report, AuditConfig, AuditReport, GapMode, ReportFormat,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "silo-audit")]
#[command(about = "Audit a content corpus against a silo/cluster taxonomy", long_about = None)]
#[command(version)]
struct Cli {
    /// Taxonomy JSON (silo -> cluster -> keywords/required_nodes)
    #[arg(long, default_value = "taxonomy.json")]
    taxonomy: PathBuf,

    /// Content root; each subdirectory with a page file is one item
    #[arg(long, default_value = "app")]
    content: PathBuf,

    /// Report destination
    #[arg(short, long, default_value = "SILO_AUDIT.md")]
    output: PathBuf,

    /// JSON config overriding listing, scoring and gap defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = FormatFlag::Markdown)]
    format: FormatFlag,

    /// Override the assignment threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Only count a required node as met when a title contains it verbatim
    #[arg(long)]
    strict_gaps: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum FormatFlag {
    Markdown,
    Json,
}

impl FormatFlag {
    const fn as_domain(self) -> ReportFormat {
        match self {
            FormatFlag::Markdown => ReportFormat::Markdown,
            FormatFlag::Json => ReportFormat::Json,
        }
    }
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(&cli)?;

    let report = audit_paths(&cli.taxonomy, &cli.content, &config).with_context(|| {
        format!(
            "Audit failed (taxonomy {}, content {})",
            cli.taxonomy.display(),
            cli.content.display()
        )
    })?;

    let rendered = cli
        .format
        .as_domain()
        .render(&report)
        .context("Failed to render report")?;
    write_report(&cli.output, &rendered).context("Failed to write report")?;

    println!("{}", summary_line(&report, &cli.output));
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<AuditConfig> {
    let mut config = match &cli.config {
        Some(path) => AuditConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AuditConfig::default(),
    };

    if let Some(threshold) = cli.threshold {
        config.scoring.threshold = threshold;
    }
    if cli.strict_gaps {
        config.gaps.mode = GapMode::Strict;
    }

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;
    Ok(config)
}

fn summary_line(report: &AuditReport, output: &std::path::Path) -> String {
    let assigned = report
        .summary
        .assigned
        .iter()
        .map(|count| format!("{} {}", count.silo, count.count))
        .collect::<Vec<_>>()
        .join(", ");
    let missing: usize = report.summary.missing.iter().map(|m| m.count).sum();
    format!(
        "{} items ({assigned}), {} orphaned, {missing} missing nodes -> {}",
        report.summary.total_items,
        report.summary.orphaned,
        output.display()
    )
}

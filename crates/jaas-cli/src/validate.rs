//! # Validation Run
//!
//! The single validation pass behind `jaas-lint`: load the schema, load the
//! dataset, run the per-record and dataset-level checks, render the report,
//! and map it to a process exit code.
//!
//! ## Output Contract
//!
//! Informational, progress, and success lines go to stdout. Every error and
//! warning line goes to stderr, prefixed `ERROR:` or `WARN:` so pass, warn,
//! and fail stay visually distinguishable. Each error names the 1-based
//! record index, the record identifier where present, and for schema
//! violations the instance path inside the record.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use jaas_core::{
    audit_dataset, load_dataset, CoverageStatus, DatasetReport, FindingKind, COVERAGE_MINIMUM,
};
use jaas_schema::CompiledSchema;

/// Schema document filename inside the data directory.
pub const SCHEMA_FILE: &str = "schema.json";

/// Dataset document filename inside the data directory.
pub const DATASET_FILE: &str = "jokes.json";

/// Arguments for the validation run.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Emit an explicit confirmation line when every check passes.
    /// Cosmetic only: validation logic and exit codes are unaffected.
    #[arg(long)]
    pub check: bool,
}

/// Execute one validation run against the inputs under `data_root`.
///
/// Returns the process exit code: 0 when every check passed, 1 on a fatal
/// load/parse/shape failure or any accumulated validation error. Fatal
/// failures short-circuit: nothing after the failure point executes.
pub fn run_validate(args: &ValidateArgs, data_root: &Path) -> Result<u8> {
    println!("JaaS joke dataset validator");
    println!();

    let schema_path = data_root.join(SCHEMA_FILE);
    let dataset_path = data_root.join(DATASET_FILE);
    tracing::debug!(
        schema = %schema_path.display(),
        dataset = %dataset_path.display(),
        "resolved validation inputs"
    );

    let schema = match CompiledSchema::load(&schema_path) {
        Ok(schema) => {
            println!("OK: schema loaded");
            schema
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            return Ok(1);
        }
    };

    let records = match load_dataset(&dataset_path) {
        Ok(records) => {
            println!("OK: dataset parsed");
            records
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            return Ok(1);
        }
    };

    println!("Total jokes: {}", records.len());
    println!();

    let report = audit_dataset(&records, &schema);
    render_report(&report, args.check);

    Ok(report.exit_code())
}

/// Print the structured report in run order: per-record findings, category
/// breakdown with coverage warnings, unknown-category errors, verdict.
fn render_report(report: &DatasetReport, check: bool) {
    for finding in &report.findings {
        match &finding.kind {
            FindingKind::DuplicateId => {
                eprintln!(
                    "ERROR: joke #{}: duplicate id \"{}\"",
                    finding.index,
                    finding.display_id()
                );
            }
            FindingKind::SchemaInvalid(violations) => {
                eprintln!(
                    "ERROR: joke #{} ({}): schema validation failed",
                    finding.index,
                    finding.display_id()
                );
                for violation in violations {
                    eprintln!("    - {violation}");
                }
            }
        }
    }

    println!("Category breakdown:");
    for row in &report.coverage {
        println!("  {}: {} jokes ({})", row.category, row.count, row.status);
        if row.status == CoverageStatus::Low {
            eprintln!(
                "WARN: category \"{}\" has fewer than {} jokes (recommended minimum)",
                row.category, COVERAGE_MINIMUM
            );
        }
    }

    for category in &report.unknown_categories {
        eprintln!("ERROR: unknown category \"{category}\"");
    }

    println!();
    if report.passed() {
        println!("All jokes passed validation");
        println!(
            "{} jokes across {} categories",
            report.total_records, report.distinct_categories
        );
        if check {
            println!("Check mode: all validations passed");
        }
    } else {
        eprintln!("Validation failed with {} error(s)", report.error_count);
    }
}

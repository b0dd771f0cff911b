//! Integration test: validate every shipped joke record against
//! data/schema.json.
//!
//! This matches the record-level half of a `jaas-lint` run. It loads the
//! schema and dataset that ship with the repository and checks each record
//! individually, reporting any failures instead of hiding them.

use std::path::PathBuf;

use jaas_core::{load_dataset, record_id, RecordValidator};
use jaas_schema::CompiledSchema;

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

#[test]
fn shipped_schema_compiles() {
    let schema = CompiledSchema::load(&repo_root().join("data/schema.json"))
        .expect("failed to load shipped schema");
    assert!(
        schema.schema().get("required").is_some(),
        "shipped schema should declare required fields"
    );
}

#[test]
fn shipped_records_all_validate() {
    let root = repo_root();
    let schema = CompiledSchema::load(&root.join("data/schema.json"))
        .expect("failed to load shipped schema");
    let records =
        load_dataset(&root.join("data/jokes.json")).expect("failed to load shipped dataset");

    let mut failed = Vec::new();
    for (position, record) in records.iter().enumerate() {
        let violations = schema.violations(record);
        if !violations.is_empty() {
            let id = record_id(record).unwrap_or("<no id>");
            for v in violations {
                failed.push(format!("joke #{} ({id}): {v}", position + 1));
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("Failures:");
        for f in &failed {
            eprintln!("  - {f}");
        }
    }

    assert!(
        failed.is_empty(),
        "{} shipped records failed schema validation",
        failed.len()
    );
}

#[test]
fn shipped_records_carry_string_ids() {
    let root = repo_root();
    let records =
        load_dataset(&root.join("data/jokes.json")).expect("failed to load shipped dataset");
    assert!(!records.is_empty());
    for record in &records {
        assert!(record_id(record).is_some(), "record without string id: {record}");
    }
}

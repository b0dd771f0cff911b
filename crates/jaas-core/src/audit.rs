//! # Dataset Validation Pass
//!
//! The single sequential pass over the dataset: duplicate detection,
//! per-record schema validation, category tally, coverage rows, and the
//! unknown-category check.
//!
//! [`audit_dataset`] is a pure function from (records, record validator) to
//! a [`DatasetReport`]. Running it twice on the same inputs produces
//! identical reports.
//!
//! ## Counting Rules
//!
//! - A repeated identifier counts one error at its second and every later
//!   occurrence.
//! - A schema-invalid record counts exactly one error regardless of how
//!   many constraint violations it produced.
//! - Each distinct unknown category counts one error, however many records
//!   carry it.
//! - Low coverage never counts; it is advisory.

use std::collections::HashSet;

use serde_json::Value;

use crate::category::{CategoryTally, CATEGORY_WHITELIST};
use crate::record::{record_category, record_id, RecordValidator};
use crate::report::{CoverageRow, CoverageStatus, DatasetReport, FindingKind, RecordFinding};

/// Run the full validation pass over `records`.
///
/// Records are visited in dataset order; findings carry the 1-based index.
/// An absent or non-string `id` participates in duplicate detection as the
/// absent identifier, so two id-less records collide with each other; the
/// schema check independently flags the missing field.
pub fn audit_dataset(records: &[Value], validator: &dyn RecordValidator) -> DatasetReport {
    let mut seen: HashSet<Option<&str>> = HashSet::new();
    let mut duplicate_ids: Vec<String> = Vec::new();
    let mut tally = CategoryTally::new();
    let mut findings: Vec<RecordFinding> = Vec::new();
    let mut error_count = 0usize;

    for (position, record) in records.iter().enumerate() {
        let index = position + 1;
        let id = record_id(record);

        if seen.contains(&id) {
            if let Some(id) = id {
                duplicate_ids.push(id.to_string());
            }
            findings.push(RecordFinding {
                index,
                id: id.map(str::to_owned),
                kind: FindingKind::DuplicateId,
            });
            error_count += 1;
        }
        seen.insert(id);

        let violations = validator.violations(record);
        if !violations.is_empty() {
            findings.push(RecordFinding {
                index,
                id: id.map(str::to_owned),
                kind: FindingKind::SchemaInvalid(violations),
            });
            error_count += 1;
        }

        if let Some(category) = record_category(record) {
            tally.observe(category);
        }
    }

    let coverage: Vec<CoverageRow> = CATEGORY_WHITELIST
        .iter()
        .map(|&category| {
            let count = tally.count(category);
            CoverageRow {
                category,
                count,
                status: CoverageStatus::from_count(count),
            }
        })
        .collect();

    let unknown_categories: Vec<String> = tally
        .unknown_categories()
        .into_iter()
        .map(str::to_owned)
        .collect();
    error_count += unknown_categories.len();

    DatasetReport {
        total_records: records.len(),
        findings,
        coverage,
        unknown_categories,
        duplicate_ids,
        distinct_categories: tally.distinct(),
        error_count,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::record::Violation;
    use proptest::prelude::*;
    use serde_json::json;

    struct AcceptAll;

    impl RecordValidator for AcceptAll {
        fn violations(&self, _record: &Value) -> Vec<Violation> {
            Vec::new()
        }
    }

    struct RejectAll(usize);

    impl RecordValidator for RejectAll {
        fn violations(&self, _record: &Value) -> Vec<Violation> {
            (0..self.0)
                .map(|i| Violation {
                    instance_path: format!("/f{i}"),
                    schema_path: String::new(),
                    message: "rejected".to_string(),
                })
                .collect()
        }
    }

    /// Strategy for a whitelist category name.
    fn whitelist_category() -> impl Strategy<Value = &'static str> {
        prop::sample::select(&CATEGORY_WHITELIST[..])
    }

    proptest! {
        /// k occurrences of one identifier produce exactly k - 1 duplicate errors.
        #[test]
        fn repeated_id_counts_k_minus_one(
            k in 2usize..10,
            unique in 0usize..10,
            category in whitelist_category(),
        ) {
            let mut records: Vec<Value> = (0..unique)
                .map(|i| json!({"id": format!("joke-u{i}"), "category": category}))
                .collect();
            records.extend(
                (0..k).map(|_| json!({"id": "joke-dup", "category": category})),
            );
            let report = audit_dataset(&records, &AcceptAll);
            prop_assert_eq!(report.error_count, k - 1);
            prop_assert_eq!(report.duplicate_ids.len(), k - 1);
        }

        /// An invalid record contributes exactly one error, however many
        /// violations the schema check produced for it.
        #[test]
        fn one_error_per_invalid_record(
            records_n in 1usize..20,
            violations_n in 1usize..10,
        ) {
            let records: Vec<Value> = (0..records_n)
                .map(|i| json!({"id": format!("joke-{i}"), "category": "pun"}))
                .collect();
            let report = audit_dataset(&records, &RejectAll(violations_n));
            prop_assert_eq!(report.error_count, records_n);
        }

        /// Each distinct unknown category counts once, however many records
        /// carry it.
        #[test]
        fn one_error_per_distinct_unknown_category(
            spread in prop::collection::vec(0usize..4, 1..30),
        ) {
            let unknown = ["zzz-a", "zzz-b", "zzz-c", "zzz-d"];
            let records: Vec<Value> = spread
                .iter()
                .enumerate()
                .map(|(i, &pick)| {
                    json!({"id": format!("joke-{i}"), "category": unknown[pick]})
                })
                .collect();
            let distinct: std::collections::HashSet<usize> =
                spread.iter().copied().collect();
            let report = audit_dataset(&records, &AcceptAll);
            prop_assert_eq!(report.error_count, distinct.len());
            prop_assert_eq!(report.unknown_categories.len(), distinct.len());
        }

        /// Well-formed datasets with unique ids and whitelisted categories
        /// always pass, whatever the coverage looks like.
        #[test]
        fn unique_whitelisted_datasets_pass(
            categories in prop::collection::vec(whitelist_category(), 0..60),
        ) {
            let records: Vec<Value> = categories
                .iter()
                .enumerate()
                .map(|(i, category)| json!({"id": format!("joke-{i}"), "category": category}))
                .collect();
            let report = audit_dataset(&records, &AcceptAll);
            prop_assert_eq!(report.error_count, 0);
            prop_assert_eq!(report.exit_code(), 0);
            prop_assert!(report.unknown_categories.is_empty());
            prop_assert_eq!(report.total_records, categories.len());
        }

        /// The pass is deterministic: two runs over the same records agree.
        #[test]
        fn pass_is_deterministic(
            categories in prop::collection::vec("[a-z]{1,8}", 0..30),
        ) {
            let records: Vec<Value> = categories
                .iter()
                .enumerate()
                .map(|(i, category)| {
                    // Reuse ids modulo 7 to exercise the duplicate path too.
                    json!({"id": format!("joke-{}", i % 7), "category": category})
                })
                .collect();
            let first = audit_dataset(&records, &AcceptAll);
            let second = audit_dataset(&records, &AcceptAll);
            prop_assert_eq!(first.error_count, second.error_count);
            prop_assert_eq!(first.duplicate_ids, second.duplicate_ids);
            prop_assert_eq!(first.unknown_categories, second.unknown_categories);
        }
    }
}

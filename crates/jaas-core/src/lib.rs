//! # jaas-core — Foundational Types for the JaaS Dataset Toolchain
//!
//! This crate is the bedrock of the JaaS joke dataset toolchain. It defines
//! the category whitelist, the per-run validation pass, and the structured
//! report the pass produces. Every other crate in the workspace depends on
//! `jaas-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **The pass is a pure function.** [`audit_dataset`] maps a slice of
//!    records plus a [`RecordValidator`] capability to a [`DatasetReport`].
//!    No printing, no process exit. Rendering and exit codes belong to the
//!    CLI crate, which keeps every counting rule testable in isolation.
//!
//! 2. **Schema validation behind a trait.** The pass never touches a schema
//!    engine directly. [`RecordValidator`] models the capability
//!    compile(schema) → validate(record) → violations; `jaas-schema`
//!    provides the `jsonschema`-backed implementation.
//!
//! 3. **Compile-time whitelist.** [`CATEGORY_WHITELIST`] is a `const`
//!    ordered array. There is no mutable global configuration.
//!
//! 4. **Fatal vs accumulated errors.** Unreadable or malformed inputs are
//!    [`DatasetError`] values returned early. Per-record defects are counted
//!    into the report and never halt the pass.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jaas-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod audit;
pub mod category;
pub mod dataset;
pub mod error;
pub mod record;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use audit::audit_dataset;
pub use category::{is_whitelisted, CategoryTally, CATEGORY_WHITELIST, COVERAGE_MINIMUM};
pub use dataset::load_dataset;
pub use error::DatasetError;
pub use record::{record_category, record_id, RecordValidator, Violation};
pub use report::{CoverageRow, CoverageStatus, DatasetReport, FindingKind, RecordFinding};

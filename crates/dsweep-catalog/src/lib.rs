//! Benchmark catalog for accelerator design-space sweeps.
//!
//! A catalog holds self-describing benchmark records: kernels, memory arrays
//! with their partitioning, loops with trip counts or unroll policies, and the
//! command templates used to run the pre-built simulation binary. Records are
//! assembled with [`BenchmarkBuilder`], frozen into [`Benchmark`], and
//! registered into a caller-owned [`BenchmarkCatalog`].
//!
//! # Example
//!
//! ```
//! use dsweep_catalog::{BenchmarkBuilder, BenchmarkCatalog, PARTITION_CYCLIC, TripCount, UNROLL_FLATTEN};
//!
//! let mut builder = BenchmarkBuilder::new("md-knn", "md", "common/harness.c");
//! builder.set_kernels(["md_kernel"]);
//! builder.set_main_id(0xB0);
//! builder.add_array("NL", 4096, 8, PARTITION_CYCLIC)?;
//! builder.add_loop("md_kernel", "loop_i", TripCount::Exact(256))?;
//! builder.add_loop("md_kernel", "loop_j", UNROLL_FLATTEN)?;
//! builder.set_exec_cmd("%(source_dir)s/md/knn/md-knn-gem5-accel");
//! builder.set_run_args("%(source_dir)s/md/knn/input.data %(source_dir)s/md/knn/check.data");
//!
//! let mut catalog = BenchmarkCatalog::new("EXAMPLE");
//! catalog.register(builder.build()?)?;
//! assert_eq!(catalog.find_by_name("md-knn")?.kernels(), ["md_kernel"]);
//! # Ok::<(), dsweep_catalog::CatalogError>(())
//! ```

mod benchmark;
mod catalog;
pub mod manifest;
pub mod suites;
mod template;
mod types;

pub use benchmark::{Benchmark, BenchmarkBuilder};
pub use catalog::BenchmarkCatalog;
pub use template::{Invocation, SOURCE_DIR_KEY, TemplateVars, expand};
pub use types::*;

use thiserror::Error;

/// Catalog construction and lookup errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate benchmark name '{0}'")]
    DuplicateName(String),
    #[error("main id {id} of '{name}' is already used by '{existing}'")]
    DuplicateId {
        id: MainId,
        name: String,
        existing: String,
    },
    #[error("no benchmark named '{0}'")]
    NotFound(String),
    #[error("benchmark name must not be empty")]
    EmptyName,
    #[error("{benchmark}: duplicate array '{array}'")]
    DuplicateArray { benchmark: String, array: String },
    #[error("{benchmark}: duplicate loop '{function}.{label}'")]
    DuplicateLoop {
        benchmark: String,
        function: String,
        label: String,
    },
    #[error("{benchmark}: array '{array}' must have a positive size")]
    InvalidArraySize { benchmark: String, array: String },
    #[error("{benchmark}: array '{array}' must have a positive word size")]
    InvalidWordSize { benchmark: String, array: String },
    #[error("{benchmark}: loop '{function}.{label}' has invalid trip count {value}")]
    InvalidTripCount {
        benchmark: String,
        function: String,
        label: String,
        value: String,
    },
    #[error("invalid partition type '{0}', expected cyclic/complete/block")]
    InvalidPartition(String),
    #[error("{benchmark}: array '{array}' has invalid partition type '{value}'")]
    InvalidArrayPartition {
        benchmark: String,
        array: String,
        value: String,
    },
    #[error("{benchmark}: missing required field '{field}'")]
    MissingField {
        benchmark: String,
        field: &'static str,
    },
    #[error("unknown template placeholder '%({0})s'")]
    UnknownPlaceholder(String),
    #[error("malformed template at byte {offset}: {template}")]
    MalformedTemplate { template: String, offset: usize },
    #[error("manifest error: {0}")]
    Manifest(#[from] toml::de::Error),
    #[error("manifest export error: {0}")]
    Export(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

//! TOML catalog manifests.
//!
//! A manifest declares a suite outside the built-in tables:
//!
//! ```toml
//! suite = "MYSUITE"
//!
//! [[benchmark]]
//! name = "aes-aes"
//! category = "aes"
//! harness = "common/harness.c"
//! kernels = ["aes256_encrypt_ecb"]
//! main_id = 0x10
//! exec_cmd = "%(source_dir)s/aes/aes/aes-aes-gem5-accel"
//! run_args = "%(source_dir)s/aes/aes/input.data %(source_dir)s/aes/aes/check.data"
//! arrays = [{ name = "ctx", size = 96, word_size = 1, partition = "cyclic" }]
//! loops = [
//!     { function = "aes_subBytes", label = "sub", trip_count = 16 },
//!     { function = "aes256_encrypt_ecb", label = "ecb3", trip_count = "unroll_one" },
//! ]
//! ```
//!
//! Every entry goes through [`BenchmarkBuilder`] and
//! [`BenchmarkCatalog::register`], so a loaded manifest obeys the same
//! invariants as a catalog declared in code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Benchmark, BenchmarkBuilder, BenchmarkCatalog, CatalogError, PartitionType, Result, TripCount,
};

/// Top-level manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Suite label.
    pub suite: String,
    #[serde(default, rename = "benchmark")]
    pub benchmarks: Vec<BenchmarkEntry>,
}

/// One `[[benchmark]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    pub category: String,
    pub harness: String,
    #[serde(default)]
    pub kernels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_cmd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_args: Option<String>,
    #[serde(default)]
    pub arrays: Vec<ArrayEntry>,
    #[serde(default)]
    pub loops: Vec<LoopEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayEntry {
    pub name: String,
    pub size: u32,
    pub word_size: u32,
    /// "cyclic", "complete" or "block".
    pub partition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopEntry {
    pub function: String,
    pub label: String,
    pub trip_count: RawTripCount,
}

/// Trip count as written in a manifest: an integer or a policy name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTripCount {
    Count(i64),
    Policy(String),
}

impl From<TripCount> for RawTripCount {
    fn from(trip_count: TripCount) -> Self {
        match trip_count {
            TripCount::Exact(n) => Self::Count(i64::from(n)),
            policy => Self::Policy(policy.to_string()),
        }
    }
}

impl RawTripCount {
    fn resolve(&self, benchmark: &str, entry: &LoopEntry) -> Result<TripCount> {
        let resolved = match self {
            Self::Count(n) => u32::try_from(*n)
                .ok()
                .filter(|n| *n > 0)
                .map(TripCount::Exact),
            Self::Policy(name) => TripCount::from_policy_name(name),
        };
        resolved.ok_or_else(|| CatalogError::InvalidTripCount {
            benchmark: benchmark.to_string(),
            function: entry.function.clone(),
            label: entry.label.clone(),
            value: match self {
                Self::Count(n) => n.to_string(),
                Self::Policy(name) => format!("'{name}'"),
            },
        })
    }
}

impl BenchmarkEntry {
    /// Run the entry through the builder.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation in the entry.
    pub fn build(&self) -> Result<Benchmark> {
        let mut b = BenchmarkBuilder::new(&self.name, &self.category, &self.harness);
        b.set_kernels(&self.kernels);
        if let Some(id) = self.main_id {
            b.set_main_id(id);
        }
        if let Some(cmd) = &self.exec_cmd {
            b.set_exec_cmd(cmd);
        }
        if let Some(args) = &self.run_args {
            b.set_run_args(args);
        }
        for array in &self.arrays {
            let partition: PartitionType = array.partition.parse().map_err(|_| {
                CatalogError::InvalidArrayPartition {
                    benchmark: self.name.clone(),
                    array: array.name.clone(),
                    value: array.partition.clone(),
                }
            })?;
            b.add_array(&array.name, array.size, array.word_size, partition)?;
        }
        for entry in &self.loops {
            let trip_count = entry.trip_count.resolve(&self.name, entry)?;
            b.add_loop(&entry.function, &entry.label, trip_count)?;
        }
        b.build()
    }

    /// Manifest form of a benchmark.
    #[must_use]
    pub fn from_benchmark(benchmark: &Benchmark) -> Self {
        Self {
            name: benchmark.name().to_string(),
            category: benchmark.category().to_string(),
            harness: benchmark.harness_path().to_string(),
            kernels: benchmark.kernels().to_vec(),
            main_id: Some(benchmark.main_id().value()),
            exec_cmd: Some(benchmark.exec_cmd().to_string()),
            run_args: Some(benchmark.run_args().to_string()),
            arrays: benchmark
                .arrays()
                .iter()
                .map(|a| ArrayEntry {
                    name: a.name.clone(),
                    size: a.size,
                    word_size: a.word_size,
                    partition: a.partition.to_string(),
                })
                .collect(),
            loops: benchmark
                .loops()
                .iter()
                .map(|l| LoopEntry {
                    function: l.function.clone(),
                    label: l.label.clone(),
                    trip_count: l.trip_count.into(),
                })
                .collect(),
        }
    }
}

impl CatalogManifest {
    /// Parse a manifest document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Manifest`] if the document is not valid TOML
    /// or does not match the manifest schema.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Build and register every entry, in document order.
    ///
    /// # Errors
    ///
    /// Returns the first declaration or registration error.
    pub fn into_catalog(self) -> Result<BenchmarkCatalog> {
        let mut catalog = BenchmarkCatalog::new(self.suite);
        for entry in &self.benchmarks {
            debug!(name = %entry.name, "building manifest entry");
            catalog.register(entry.build()?)?;
        }
        Ok(catalog)
    }

    /// Manifest form of a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &BenchmarkCatalog) -> Self {
        Self {
            suite: catalog.suite_name().to_string(),
            benchmarks: catalog.iter().map(BenchmarkEntry::from_benchmark).collect(),
        }
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Export`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl BenchmarkCatalog {
    /// Load a catalog from a TOML manifest string.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first invariant violation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        CatalogManifest::from_toml_str(source)?.into_catalog()
    }

    /// Load a catalog from a TOML manifest file.
    ///
    /// # Errors
    ///
    /// Returns an IO error, a parse error, or the first invariant violation.
    pub fn from_manifest_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            suite = catalog.suite_name(),
            benchmarks = catalog.len(),
            "loaded manifest"
        );
        Ok(catalog)
    }

    /// Render the catalog as a TOML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Export`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        CatalogManifest::from_catalog(self).to_toml_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MainId, PARTITION_COMPLETE, UNROLL_ONE};

    const AES: &str = r#"
suite = "SMALL"

[[benchmark]]
name = "aes-aes"
category = "aes"
harness = "common/harness.c"
kernels = ["aes256_encrypt_ecb"]
main_id = 0x10
exec_cmd = "%(source_dir)s/aes/aes/aes-aes-gem5-accel"
run_args = "%(source_dir)s/aes/aes/input.data %(source_dir)s/aes/aes/check.data"
arrays = [
    { name = "ctx", size = 96, word_size = 1, partition = "cyclic" },
    { name = "rcon", size = 1, word_size = 1, partition = "COMPLETE" },
]
loops = [
    { function = "aes_subBytes", label = "sub", trip_count = 16 },
    { function = "aes256_encrypt_ecb", label = "ecb3", trip_count = "unroll_one" },
]
"#;

    fn with_replaced(from: &str, to: &str) -> String {
        assert!(AES.contains(from));
        AES.replace(from, to)
    }

    #[test]
    fn test_load() {
        let catalog = BenchmarkCatalog::from_toml_str(AES).unwrap();
        assert_eq!(catalog.suite_name(), "SMALL");
        let aes = catalog.find_by_name("aes-aes").unwrap();
        assert_eq!(aes.main_id(), MainId(0x10));
        assert_eq!(aes.arrays()[1].partition, PARTITION_COMPLETE);
        assert_eq!(aes.loops()[0].trip_count, TripCount::Exact(16));
        assert_eq!(aes.loops()[1].trip_count, UNROLL_ONE);
    }

    #[test]
    fn test_zero_trip_count_rejected() {
        let source = with_replaced("trip_count = 16", "trip_count = 0");
        let err = BenchmarkCatalog::from_toml_str(&source).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidTripCount { ref label, ref value, .. } if label == "sub" && value == "0"
        ));
    }

    #[test]
    fn test_negative_and_unknown_trip_counts_rejected() {
        let source = with_replaced("trip_count = 16", "trip_count = -4");
        assert!(matches!(
            BenchmarkCatalog::from_toml_str(&source),
            Err(CatalogError::InvalidTripCount { .. })
        ));
        let source = with_replaced("\"unroll_one\"", "\"unroll_twice\"");
        assert!(matches!(
            BenchmarkCatalog::from_toml_str(&source),
            Err(CatalogError::InvalidTripCount { ref value, .. }) if value == "'unroll_twice'"
        ));
    }

    #[test]
    fn test_bad_partition_rejected() {
        let source = with_replaced("\"COMPLETE\"", "\"banked\"");
        assert!(matches!(
            BenchmarkCatalog::from_toml_str(&source),
            Err(CatalogError::InvalidArrayPartition { ref benchmark, ref array, ref value })
                if benchmark == "aes-aes" && array == "rcon" && value == "banked"
        ));
    }

    #[test]
    fn test_missing_main_id_rejected() {
        let source = with_replaced("main_id = 0x10\n", "");
        assert!(matches!(
            BenchmarkCatalog::from_toml_str(&source),
            Err(CatalogError::MissingField { field: "main_id", .. })
        ));
    }

    #[test]
    fn test_duplicate_benchmark_rejected() {
        let second = AES.split_once("[[benchmark]]").unwrap().1;
        let source = format!("{AES}\n[[benchmark]]{second}");
        assert!(matches!(
            BenchmarkCatalog::from_toml_str(&source),
            Err(CatalogError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            BenchmarkCatalog::from_toml_str("suite = "),
            Err(CatalogError::Manifest(_))
        ));
    }

    #[test]
    fn test_export_reloads_equal() {
        let catalog = BenchmarkCatalog::from_toml_str(AES).unwrap();
        let exported = catalog.to_toml_string().unwrap();
        let reloaded = BenchmarkCatalog::from_toml_str(&exported).unwrap();
        assert_eq!(reloaded, catalog);
    }
}

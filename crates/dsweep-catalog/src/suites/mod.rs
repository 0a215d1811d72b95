//! Built-in benchmark suites.

mod machsuite;

pub use machsuite::{MACHSUITE_NAME, machsuite};

use crate::{BenchmarkCatalog, Result};

/// Built-in suite metadata.
pub struct SuiteInfo {
    /// Suite name (used in CLI).
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Build the suite's catalog.
    pub load: fn() -> Result<BenchmarkCatalog>,
}

/// All built-in suites.
pub const SUITES: &[SuiteInfo] = &[SuiteInfo {
    name: "machsuite",
    description: "MachSuite accelerator benchmarks (gem5-aladdin harness)",
    load: machsuite,
}];

/// Find suite by name (case-insensitive).
#[must_use]
pub fn find_suite(name: &str) -> Option<&'static SuiteInfo> {
    SUITES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_suite() {
        assert_eq!(find_suite("MachSuite").unwrap().name, "machsuite");
        assert!(find_suite("polybench").is_none());
    }

    #[test]
    fn test_all_suites_load() {
        for suite in SUITES {
            let catalog = (suite.load)().unwrap();
            assert!(!catalog.is_empty(), "{} is empty", suite.name);
        }
    }
}

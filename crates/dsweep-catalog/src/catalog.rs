//! Benchmark registry.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Benchmark, CatalogError, MainId, Result};

/// Ordered, caller-owned collection of benchmarks with unique names and ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCatalog {
    suite_name: String,
    benchmarks: Vec<Benchmark>,
    by_name: FxHashMap<String, usize>,
    by_id: FxHashMap<MainId, usize>,
}

impl BenchmarkCatalog {
    /// Create an empty catalog for a suite.
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            benchmarks: Vec::new(),
            by_name: FxHashMap::default(),
            by_id: FxHashMap::default(),
        }
    }

    /// Add a benchmark. On error the catalog is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] or [`CatalogError::DuplicateId`]
    /// if the benchmark collides with one already registered.
    pub fn register(&mut self, benchmark: Benchmark) -> Result<()> {
        if self.by_name.contains_key(benchmark.name()) {
            return Err(CatalogError::DuplicateName(benchmark.name().to_string()));
        }
        if let Some(&idx) = self.by_id.get(&benchmark.main_id()) {
            return Err(CatalogError::DuplicateId {
                id: benchmark.main_id(),
                name: benchmark.name().to_string(),
                existing: self.benchmarks[idx].name().to_string(),
            });
        }

        debug!(
            suite = %self.suite_name,
            name = benchmark.name(),
            main_id = %benchmark.main_id(),
            arrays = benchmark.arrays().len(),
            loops = benchmark.loops().len(),
            "registered benchmark"
        );
        let idx = self.benchmarks.len();
        self.by_name.insert(benchmark.name().to_string(), idx);
        self.by_id.insert(benchmark.main_id(), idx);
        self.benchmarks.push(benchmark);
        Ok(())
    }

    /// All benchmarks in registration order.
    #[must_use]
    pub fn all(&self) -> &[Benchmark] {
        &self.benchmarks
    }

    /// Find benchmark by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no benchmark has that name.
    pub fn find_by_name(&self, name: &str) -> Result<&Benchmark> {
        self.by_name
            .get(name)
            .map(|&idx| &self.benchmarks[idx])
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Find benchmark by main id.
    #[must_use]
    pub fn find_by_main_id(&self, id: MainId) -> Option<&Benchmark> {
        self.by_id.get(&id).map(|&idx| &self.benchmarks[idx])
    }

    #[must_use]
    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    /// Benchmarks in a category, in registration order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Benchmark> + 'a {
        self.benchmarks
            .iter()
            .filter(move |b| b.category() == category)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for b in &self.benchmarks {
            if !seen.contains(&b.category()) {
                seen.push(b.category());
            }
        }
        seen
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Benchmark> {
        self.benchmarks.iter()
    }
}

impl<'a> IntoIterator for &'a BenchmarkCatalog {
    type Item = &'a Benchmark;
    type IntoIter = std::slice::Iter<'a, Benchmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.benchmarks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BenchmarkBuilder, PARTITION_CYCLIC};

    fn bench(name: &str, category: &str, id: u32) -> Benchmark {
        let mut b = BenchmarkBuilder::new(name, category, "common/harness.c");
        b.set_kernels([category]);
        b.set_main_id(id);
        b.add_array("a", 16, 4, PARTITION_CYCLIC).unwrap();
        b.set_exec_cmd(format!("%(source_dir)s/{name}"));
        b.set_run_args("%(source_dir)s/input.data %(source_dir)s/check.data");
        b.build().unwrap()
    }

    #[test]
    fn test_register_preserves_order() {
        let mut catalog = BenchmarkCatalog::new("TEST");
        catalog.register(bench("sort-radix", "radix", 0xE0)).unwrap();
        catalog.register(bench("aes-aes", "aes", 0x10)).unwrap();
        catalog.register(bench("bfs-bulk", "bulk", 0x30)).unwrap();

        let names: Vec<_> = catalog.all().iter().map(Benchmark::name).collect();
        assert_eq!(names, ["sort-radix", "aes-aes", "bfs-bulk"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.suite_name(), "TEST");
    }

    #[test]
    fn test_duplicate_name_leaves_catalog_unchanged() {
        let mut catalog = BenchmarkCatalog::new("TEST");
        catalog.register(bench("aes-aes", "aes", 0x10)).unwrap();

        let err = catalog.register(bench("aes-aes", "aes", 0x11)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(ref n) if n == "aes-aes"));
        assert_eq!(catalog.all().len(), 1);
        assert_eq!(catalog.all()[0].main_id(), MainId(0x10));
        // The rejected id was never indexed.
        assert!(catalog.find_by_main_id(MainId(0x11)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = BenchmarkCatalog::new("TEST");
        catalog.register(bench("aes-aes", "aes", 0x10)).unwrap();

        let err = catalog.register(bench("bfs-bulk", "bulk", 0x10)).unwrap_err();
        match err {
            CatalogError::DuplicateId { id, name, existing } => {
                assert_eq!(id, MainId(0x10));
                assert_eq!(name, "bfs-bulk");
                assert_eq!(existing, "aes-aes");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_name("bfs-bulk").is_err());
    }

    #[test]
    fn test_lookups() {
        let mut catalog = BenchmarkCatalog::new("TEST");
        assert!(catalog.is_empty());
        catalog.register(bench("md-grid", "md", 0xA0)).unwrap();
        catalog.register(bench("aes-aes", "aes", 0x10)).unwrap();
        catalog.register(bench("md-knn", "md", 0xB0)).unwrap();

        assert_eq!(catalog.find_by_name("md-knn").unwrap().main_id(), MainId(0xB0));
        assert!(matches!(
            catalog.find_by_name("nonexistent"),
            Err(CatalogError::NotFound(ref n)) if n == "nonexistent"
        ));
        assert_eq!(catalog.find_by_main_id(MainId(0x10)).unwrap().name(), "aes-aes");

        let md: Vec<_> = catalog.by_category("md").map(Benchmark::name).collect();
        assert_eq!(md, ["md-grid", "md-knn"]);
        assert_eq!(catalog.categories(), ["md", "aes"]);
        assert_eq!((&catalog).into_iter().count(), 3);
    }
}

//! `check` command.

use dsweep_catalog::{BenchmarkCatalog, TemplateVars};
use tracing::info;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal;

/// Handle the `check` command.
///
/// Declarations were validated when the catalog was built; this also expands
/// every command template, which is otherwise only checked at use.
pub fn cmd_check(catalog: &BenchmarkCatalog) -> i32 {
    let vars = TemplateVars::with_source_dir(std::path::Path::new("."));
    let mut failures = 0usize;
    for b in catalog {
        if let Err(err) = b.invocation_with(&vars) {
            terminal::error(&format!("{}: {err}", b.name()));
            failures += 1;
        }
    }

    let arrays: usize = catalog.iter().map(|b| b.arrays().len()).sum();
    let loops: usize = catalog.iter().map(|b| b.loops().len()).sum();
    info!(
        suite = catalog.suite_name(),
        benchmarks = catalog.len(),
        arrays,
        loops,
        "checked catalog"
    );

    if failures > 0 {
        terminal::error(&format!("{failures} benchmark(s) with invalid command templates"));
        return EXIT_FAILURE;
    }
    terminal::success(&format!(
        "{}: {} benchmarks, {} arrays, {} loops",
        catalog.suite_name(),
        catalog.len(),
        arrays,
        loops
    ));
    EXIT_SUCCESS
}

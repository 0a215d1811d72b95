//! `export` command.

use std::path::Path;

use dsweep_catalog::BenchmarkCatalog;
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal;

/// Handle the `export` command.
pub fn cmd_export(catalog: &BenchmarkCatalog, output: Option<&Path>) -> i32 {
    let manifest = match catalog.to_toml_string() {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "export failed");
            return EXIT_FAILURE;
        }
    };

    let Some(path) = output else {
        print!("{manifest}");
        return EXIT_SUCCESS;
    };
    match std::fs::write(path, manifest) {
        Ok(()) => {
            terminal::success(&format!(
                "wrote {} benchmarks to {}",
                catalog.len(),
                path.display()
            ));
            EXIT_SUCCESS
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to write manifest");
            EXIT_FAILURE
        }
    }
}

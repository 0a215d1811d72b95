//! Command implementations.
//!
//! Each submodule handles a specific CLI command.

mod check;
mod export;
mod expand;
mod list;
mod show;

use dsweep_catalog::BenchmarkCatalog;
use dsweep_catalog::suites::{self, SUITES};
use tracing::{debug, error};

use crate::cli::{Cli, Commands, EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal::{self, Alignment, Table};

const DEFAULT_SUITE: &str = "machsuite";

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::List { category, format } => {
            with_catalog(cli, |c| list::cmd_list(c, category.as_deref(), *format))
        }
        Commands::Show { name, format } => with_catalog(cli, |c| show::cmd_show(c, name, *format)),
        Commands::Check => with_catalog(cli, check::cmd_check),
        Commands::Expand { name, source_dir } => {
            with_catalog(cli, |c| expand::cmd_expand(c, name, source_dir))
        }
        Commands::Export { output } => {
            with_catalog(cli, |c| export::cmd_export(c, output.as_deref()))
        }
        Commands::Suites => cmd_suites(),
    }
}

/// Load the selected catalog and run `handler` on it.
fn with_catalog(cli: &Cli, handler: impl FnOnce(&BenchmarkCatalog) -> i32) -> i32 {
    match load_catalog(cli) {
        Ok(catalog) => handler(&catalog),
        Err(err) => {
            error!(error = %err, "failed to load catalog");
            EXIT_FAILURE
        }
    }
}

/// Build the catalog selected by `--manifest` / `--suite`.
fn load_catalog(cli: &Cli) -> Result<BenchmarkCatalog, String> {
    if let Some(path) = &cli.manifest {
        return BenchmarkCatalog::from_manifest_path(path)
            .map_err(|e| format!("{}: {e}", path.display()));
    }

    let name = cli.suite.as_deref().unwrap_or(DEFAULT_SUITE);
    let suite = suites::find_suite(name).ok_or_else(|| {
        let known: Vec<_> = SUITES.iter().map(|s| s.name).collect();
        format!("unknown suite '{name}', expected one of: {}", known.join(", "))
    })?;
    debug!(suite = suite.name, "loading built-in suite");
    (suite.load)().map_err(|e| e.to_string())
}

fn cmd_suites() -> i32 {
    let mut table = Table::new(vec!["Suite", "Benchmarks", "Description"]).with_alignments(vec![
        Alignment::Left,
        Alignment::Right,
        Alignment::Left,
    ]);
    let mut failed = false;
    for suite in SUITES {
        let count = match (suite.load)() {
            Ok(catalog) => catalog.len().to_string(),
            Err(err) => {
                terminal::error(&format!("{}: {err}", suite.name));
                failed = true;
                "-".to_string()
            }
        };
        table.add_row(vec![
            suite.name.to_string(),
            count,
            suite.description.to_string(),
        ]);
    }
    table.print();
    if failed { EXIT_FAILURE } else { EXIT_SUCCESS }
}

//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "dsweep")]
#[command(about = "Inspect benchmark catalogs for accelerator design sweeps")]
#[command(version)]
pub struct Cli {
    /// Load the catalog from a TOML manifest instead of a built-in suite
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "suite")]
    pub manifest: Option<PathBuf>,

    /// Built-in suite to load (default: machsuite)
    #[arg(long, global = true, value_name = "NAME")]
    pub suite: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List benchmarks in the catalog
    List {
        /// Only show benchmarks in this category
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show every field of one benchmark
    Show {
        /// Benchmark name (e.g. aes-aes)
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Validate the catalog and its command templates
    Check,
    /// Print the resolved simulator command line for a benchmark
    Expand {
        /// Benchmark name (e.g. aes-aes)
        #[arg(value_name = "NAME")]
        name: String,

        /// Root of the suite checkout substituted for %(source_dir)s
        #[arg(long, value_name = "DIR", default_value = ".")]
        source_dir: PathBuf,
    },
    /// Write the catalog as a TOML manifest
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List built-in suites
    Suites,
}

/// Output format for catalog listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// JSON (pretty-printed)
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_expand() {
        let cli = Cli::parse_from(["dsweep", "expand", "aes-aes", "--source-dir", "/data"]);
        let Commands::Expand { name, source_dir } = cli.command else {
            panic!("expected expand");
        };
        assert_eq!(name, "aes-aes");
        assert_eq!(source_dir, PathBuf::from("/data"));
    }

    #[test]
    fn test_manifest_conflicts_with_suite() {
        let result = Cli::try_parse_from([
            "dsweep",
            "--manifest",
            "a.toml",
            "--suite",
            "machsuite",
            "list",
        ]);
        assert!(result.is_err());
    }
}

//! `expand` command.

use std::path::Path;

use dsweep_catalog::BenchmarkCatalog;
use tracing::{debug, error};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};

/// Handle the `expand` command.
pub fn cmd_expand(catalog: &BenchmarkCatalog, name: &str, source_dir: &Path) -> i32 {
    let invocation = match catalog
        .find_by_name(name)
        .and_then(|b| b.invocation(source_dir))
    {
        Ok(inv) => inv,
        Err(err) => {
            error!(benchmark = name, error = %err, "expansion failed");
            return EXIT_FAILURE;
        }
    };

    if let Some(check) = invocation.check_data() {
        debug!(check = %check.display(), "reference output");
    }
    println!("{invocation}");
    EXIT_SUCCESS
}

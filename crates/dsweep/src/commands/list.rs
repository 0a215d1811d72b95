//! `list` command.

use dsweep_catalog::{Benchmark, BenchmarkCatalog};
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
use crate::terminal::{self, Alignment, Table};

/// Handle the `list` command.
pub fn cmd_list(catalog: &BenchmarkCatalog, category: Option<&str>, format: OutputFormat) -> i32 {
    let selected: Vec<&Benchmark> = match category {
        Some(cat) => catalog.by_category(cat).collect(),
        None => catalog.iter().collect(),
    };

    if let Some(cat) = category
        && selected.is_empty()
    {
        let known = catalog.categories().join(", ");
        terminal::error(&format!("no benchmarks in category '{cat}' (known: {known})"));
        return EXIT_FAILURE;
    }

    match format {
        OutputFormat::Text => {
            summary_table(&selected).print();
            terminal::info(&format!(
                "{}: {} of {} benchmarks",
                catalog.suite_name(),
                selected.len(),
                catalog.len()
            ));
            EXIT_SUCCESS
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&selected) {
            Ok(json) => {
                println!("{json}");
                EXIT_SUCCESS
            }
            Err(err) => {
                error!(error = %err, "JSON encoding failed");
                EXIT_FAILURE
            }
        },
    }
}

fn summary_table(benchmarks: &[&Benchmark]) -> Table {
    let mut table = Table::new(vec![
        "Name", "Category", "Main ID", "Kernels", "Arrays", "Loops", "Bytes",
    ])
    .with_alignments(vec![
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
    ]);
    for b in benchmarks {
        table.add_row(vec![
            b.name().to_string(),
            b.category().to_string(),
            b.main_id().to_string(),
            b.kernels().join(","),
            b.arrays().len().to_string(),
            b.loops().len().to_string(),
            b.total_array_bytes().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows() {
        let catalog = dsweep_catalog::suites::machsuite().unwrap();
        let selected: Vec<_> = catalog.by_category("md").collect();
        let rendered = summary_table(&selected).render();
        assert!(rendered.contains("| md-grid "));
        assert!(rendered.contains("| md-knn "));
        assert!(rendered.contains("0x000000B0"));
        assert_eq!(rendered.lines().count(), 4);
    }
}

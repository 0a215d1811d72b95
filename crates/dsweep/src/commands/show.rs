//! `show` command.

use dsweep_catalog::{Benchmark, BenchmarkCatalog};
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
use crate::terminal::{self, Alignment, Table};

/// Handle the `show` command.
pub fn cmd_show(catalog: &BenchmarkCatalog, name: &str, format: OutputFormat) -> i32 {
    let benchmark = match catalog.find_by_name(name) {
        Ok(b) => b,
        Err(err) => {
            terminal::error(&err.to_string());
            return EXIT_FAILURE;
        }
    };

    match format {
        OutputFormat::Text => {
            print_benchmark(benchmark);
            EXIT_SUCCESS
        }
        OutputFormat::Json => match serde_json::to_string_pretty(benchmark) {
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

fn print_benchmark(b: &Benchmark) {
    terminal::header(b.name());
    terminal::field("category", b.category());
    terminal::field("main id", b.main_id());
    terminal::field("harness", b.harness_path());
    terminal::field("kernels", b.kernels().join(", "));
    terminal::field("exec", b.exec_cmd());
    terminal::field("args", b.run_args());

    terminal::header("Arrays");
    arrays_table(b).print();

    terminal::header("Loops");
    loops_table(b).print();
}

fn arrays_table(b: &Benchmark) -> Table {
    let mut table = Table::new(vec!["Array", "Size", "Word", "Bytes", "Partition"]).with_alignments(
        vec![
            Alignment::Left,
            Alignment::Right,
            Alignment::Right,
            Alignment::Right,
            Alignment::Left,
        ],
    );
    for a in b.arrays() {
        table.add_row(vec![
            a.name.clone(),
            a.size.to_string(),
            a.word_size.to_string(),
            a.total_bytes().to_string(),
            a.partition.to_string(),
        ]);
    }
    table
}

fn loops_table(b: &Benchmark) -> Table {
    let mut table = Table::new(vec!["Function", "Label", "Trip count"]).with_alignments(vec![
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
    ]);
    for l in b.loops() {
        table.add_row(vec![
            l.function.clone(),
            l.label.clone(),
            l.trip_count.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        let catalog = dsweep_catalog::suites::machsuite().unwrap();
        let fft = catalog.find_by_name("fft-transpose").unwrap();

        let arrays = arrays_table(fft).render();
        assert!(arrays.contains("fft1D_512.reversed"));
        assert!(arrays.contains("complete"));
        assert_eq!(arrays.lines().count(), 2 + fft.arrays().len());

        let loops = loops_table(fft).render();
        assert!(loops.contains("twiddles"));
        assert_eq!(loops.lines().count(), 2 + fft.loops().len());
    }
}

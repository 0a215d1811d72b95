//! Styled status output and markdown tables.
//!
//! Status lines go to stderr so stdout carries only catalog data.

use std::fmt::Write as _;
use std::io::{self, Write};

use console::style;

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", style("→").cyan(), message);
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a section title to stdout.
pub fn header(message: &str) {
    println!("\n{}", style(message).bold());
}

/// Print a `key: value` line to stdout.
pub fn field(key: &str, value: impl std::fmt::Display) {
    println!("  {:<10} {}", style(format!("{key}:")).dim(), value);
}

/// Column alignment.
#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// A builder for markdown tables.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Alignment>,
}

impl Table {
    /// Create a new table with headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let count = headers.len();
        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
            alignments: vec![Alignment::Left; count],
        }
    }

    /// Set column alignments.
    #[must_use]
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table as a markdown table.
    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let mut output = String::new();

        output.push('|');
        for (header, &w) in self.headers.iter().zip(&widths) {
            let _ = write!(output, " {header:^w$} |");
        }
        output.push('\n');

        output.push('|');
        for (i, &width) in widths.iter().enumerate() {
            match self.alignments.get(i).copied().unwrap_or_default() {
                Alignment::Left => {
                    let _ = write!(output, ":{:-<w$}|", "", w = width + 1);
                }
                Alignment::Right => {
                    let _ = write!(output, "{:-<w$}:|", "", w = width + 1);
                }
            }
        }
        output.push('\n');

        for row in &self.rows {
            output.push('|');
            for (i, cell) in row.iter().enumerate() {
                let w = widths.get(i).copied().unwrap_or(0);
                match self.alignments.get(i).copied().unwrap_or_default() {
                    Alignment::Left => {
                        let _ = write!(output, " {cell:<w$} |");
                    }
                    Alignment::Right => {
                        let _ = write!(output, " {cell:>w$} |");
                    }
                }
            }
            output.push('\n');
        }

        output
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let mut table =
            Table::new(vec!["Name", "Loops"]).with_alignments(vec![Alignment::Left, Alignment::Right]);
        table.add_row(vec!["aes-aes".to_string(), "6".to_string()]);
        table.add_row(vec!["kmp".to_string(), "4".to_string()]);

        let rendered = table.render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "|  Name   | Loops |");
        assert_eq!(lines[1], "|:--------|------:|");
        assert_eq!(lines[2], "| aes-aes |     6 |");
        assert_eq!(lines[3], "| kmp     |     4 |");
    }

    #[test]
    fn test_render_empty() {
        assert!(Table::new(vec![]).render().is_empty());
    }
}

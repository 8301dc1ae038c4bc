//! Table rendering utilities for CLI outputs.
//!
//! Cells may contain newlines (pre-wrapped text); each logical row then
//! expands to as many terminal lines as its tallest cell. Widths are
//! computed on the visible text, ANSI codes excluded.

use crate::utils::formatting::display_width;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            min_width: 0,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| display_width(&c.header).max(c.min_width))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                for line in cell.lines() {
                    widths[i] = widths[i].max(display_width(line));
                }
            }
        }

        widths
    }

    pub fn render(&self, separator: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            push_padded(&mut out, &col.header, widths[i]);
        }
        out.push('\n');

        // Rule line
        let rule_char = separator.chars().next().unwrap_or('-');
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&rule_char.to_string().repeat(total));
        out.push('\n');

        // Rows; multi-line cells expand downwards
        for row in &self.rows {
            let height = row.iter().map(|c| c.lines().count().max(1)).max().unwrap_or(1);

            for line_idx in 0..height {
                for i in 0..self.columns.len() {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    let line = cell.lines().nth(line_idx).unwrap_or("");
                    push_padded(&mut out, line, widths[i]);
                }
                out.push('\n');
            }
        }

        out
    }
}

/// Pad on visible width, then a two-space column gap.
fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let pad = width.saturating_sub(display_width(text));
    out.push_str(&" ".repeat(pad + 2));
}

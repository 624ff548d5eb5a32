//! Table rendering utilities for CLI outputs.
//! Cells wider than their column wrap onto continuation lines.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
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

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_line(&header));
        out.push_str(&self.render_line(
            &self
                .columns
                .iter()
                .map(|c| "-".repeat(c.width))
                .collect::<Vec<_>>(),
        ));

        // Rows
        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    textwrap::wrap(cell, col.width.max(1))
                        .into_iter()
                        .map(|line| line.into_owned())
                        .collect()
                })
                .collect();

            let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for line_no in 0..height {
                let line: Vec<String> = wrapped
                    .iter()
                    .map(|lines| lines.get(line_no).cloned().unwrap_or_default())
                    .collect();
                out.push_str(&self.render_line(&line));
            }
        }

        out
    }

    fn render_line(&self, cells: &[String]) -> String {
        let mut line = String::new();
        for (col, cell) in self.columns.iter().zip(cells) {
            let pad = col.width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
        }
        line.truncate(line.trim_end().len());
        line.push('\n');
        line
    }
}

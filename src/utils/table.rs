//! Table rendering utilities for CLI outputs.

use super::colors::colorize_optional;
use super::formatting::{pad_left, pad_right, truncate};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Hard cap on the cell width; longer cells are truncated.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: impl Into<String>, align: Align) -> Self {
        Self {
            header: header.into(),
            align,
            max_width: None,
        }
    }

    pub fn max_width(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
    /// Grey out placeholder cells (terminal output only).
    pub color: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
            color: false,
        }
    }

    pub fn colored(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn separator(mut self, c: char) -> Self {
        self.separator = c;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell(&self, i: usize, value: &str) -> String {
        match self.columns[i].max_width {
            Some(max) => truncate(value, max),
            None => value.to_string(),
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|v| UnicodeWidthStr::width(self.cell(i, v).as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| pad_right(&col.header, *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let rule_len = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(rule_len));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let value = self.cell(i, row.get(i).map(String::as_str).unwrap_or(""));
                    let padded = match col.align {
                        Align::Left => pad_right(&value, widths[i]),
                        Align::Right => pad_left(&value, widths[i]),
                    };
                    if self.color {
                        colorize_optional(&padded)
                    } else {
                        padded
                    }
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let mut table = Table::new(vec![
            Column::new("N°", Align::Right),
            Column::new("Client", Align::Left),
        ]);
        table.add_row(vec!["12".into(), "Acme".into()]);
        table.add_row(vec!["3".into(), "Beta Industries".into()]);

        let out = table.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "N° Client");
        assert_eq!(lines[1], "-".repeat(18));
        assert_eq!(lines[2], "12 Acme");
        assert_eq!(lines[3], " 3 Beta Industries");
    }

    #[test]
    fn caps_wide_columns() {
        let mut table = Table::new(vec![Column::new("Photo", Align::Left).max_width(8)]).separator('=');
        table.add_row(vec!["https://cdn.example/a.jpg".into()]);

        let out = table.render();
        assert!(out.contains("https:/…"));
        assert!(out.contains("========"));
    }
}

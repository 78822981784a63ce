//! The table model: columns, rows, and the options that shape rendering.
//!
//! A `Table` owns its column definitions and rows and checks the one structural
//! rule that matters for layout: every row has one cell per column. All
//! mutation goes through methods that enforce it.

use crate::column::ColumnSpec;
use crate::error::GridError;
use crate::measure::visual_length;
use crate::render::TableRenderer;
use crate::Result;

/// A table of string cells with at least one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
    header: Option<String>,
    show_row_count: bool,
}

impl Table {
    /// Create an empty table. Fails if `columns` is empty.
    pub fn new(columns: impl IntoIterator<Item = ColumnSpec>) -> Result<Self> {
        let columns: Vec<ColumnSpec> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(GridError::NoColumns);
        }

        Ok(Table {
            columns,
            rows: Vec::new(),
            header: None,
            show_row_count: false,
        })
    }

    /// Create a table of unlimited columns from their names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table::new(names.into_iter().map(ColumnSpec::new))
    }

    /// Set the banner shown above the table, replacing any previous one.
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.set_header(header);
        self
    }

    /// Toggle the trailing `Count: N` line.
    pub fn show_row_count(&mut self, show: bool) {
        self.show_row_count = show;
    }

    pub fn with_row_count(mut self, show: bool) -> Self {
        self.show_row_count(show);
        self
    }

    /// Append one row. The table is left unchanged if the row has the wrong
    /// number of cells.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.check_arity(&row, None)?;
        self.rows.push(row);
        Ok(())
    }

    /// Replace every row at once.
    ///
    /// All rows are checked before any is stored: on error the previous rows
    /// are kept as they were.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) -> Result<()> {
        for (index, row) in rows.iter().enumerate() {
            self.check_arity(row, Some(index))?;
        }
        self.rows = rows;
        Ok(())
    }

    /// Rendered width of each column, margins excluded.
    ///
    /// A column is as wide as its name or its widest cell, whichever is wider,
    /// clamped to its max width. Without a max width a column may be wider
    /// than its name.
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|row| visual_length(&row[i]))
                    .fold(visual_length(column.name()), usize::max);

                match column.max_width() {
                    Some(max_width) if widest > max_width => max_width,
                    _ => widest,
                }
            })
            .collect()
    }

    /// Check that every stored row still has one cell per column.
    pub fn validate(&self) -> Result<()> {
        self.rows
            .iter()
            .enumerate()
            .try_for_each(|(index, row)| self.check_arity(row, Some(index)))
    }

    /// Render with the default renderer (console colors, default palettes).
    pub fn render_to_string(&self) -> Result<String> {
        TableRenderer::new().render(self)
    }

    /// Render with the default renderer and write the result to stdout.
    pub fn print(&self) -> Result<()> {
        TableRenderer::new().print(self)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn shows_row_count(&self) -> bool {
        self.show_row_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn check_arity(&self, row: &[String], index: Option<usize>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(GridError::RowArity {
                row: index,
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        Ok(())
    }
}

//! Error types for gridprintlib

use thiserror::Error;

/// Errors that can occur while building or rendering a table
#[derive(Error, Debug)]
pub enum GridError {
    /// A table was created without any columns
    #[error("must have at least 1 column")]
    NoColumns,

    /// A column's max width leaves no room for the "..." ellipsis
    #[error("column {column} max width {max_width} must be greater than 3")]
    MaxWidthTooSmall { column: String, max_width: usize },

    /// A column's own name does not fit in its max width
    #[error("column name {column} cannot be longer than max width {max_width}")]
    NameExceedsMaxWidth { column: String, max_width: usize },

    /// A color palette was given no colors to cycle through
    #[error("color palette must have at least 1 color")]
    EmptyPalette,

    /// A row does not have one cell per column
    #[error("{}row length {actual} must match columns {expected}", row_prefix(.row))]
    RowArity {
        row: Option<usize>,
        expected: usize,
        actual: usize,
    },

    /// Writing the rendered table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn row_prefix(row: &Option<usize>) -> String {
    match row {
        Some(index) => format!("row {}: ", index),
        None => String::new(),
    }
}

impl GridError {
    /// True for errors raised while configuring columns, tables or palettes.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            GridError::NoColumns
                | GridError::MaxWidthTooSmall { .. }
                | GridError::NameExceedsMaxWidth { .. }
                | GridError::EmptyPalette
        )
    }

    /// True when a row's cell count did not match the column count.
    pub fn is_row_arity(&self) -> bool {
        matches!(self, GridError::RowArity { .. })
    }
}

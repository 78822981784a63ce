//! # gridprintlib
//!
//! Render rows of strings as bordered, fixed-width text tables for the terminal.
//!
//! ## Overview
//!
//! A [`Table`] holds column definitions and rows. A [`TableRenderer`] lays them
//! out as text:
//!
//! - **Widths**: each column is as wide as its name or its widest cell, capped
//!   by an optional max width
//! - **Truncation**: cells past a column's max width are cut and end in `...`
//! - **Combining marks**: diacritics such as `a\u{0323}` take no column of their
//!   own, so they are ignored when measuring and never split from their base
//!   character when truncating
//! - **Colors**: header cells cycle through a column palette, data rows through
//!   a row palette; the actual styling is delegated to a [`Colorize`]
//!   implementation
//! - **Extras**: an optional banner above the table and an optional
//!   `Count: N` line below it
//!
//! The library performs no I/O except in [`TableRenderer::print`] and
//! [`TableRenderer::write_to`], and never logs.
//!
//! ## Example
//!
//! ```rust
//! use gridprintlib::{ColumnSpec, Table, TableRenderer};
//!
//! let mut table = Table::new([ColumnSpec::new("Name"), ColumnSpec::new("Type")]).unwrap();
//! table.add_row(["Noel", "Human"]).unwrap();
//! table.add_row(["David", "Cyborg"]).unwrap();
//! table.add_row(["Pranava", "Crusher"]).unwrap();
//!
//! let out = TableRenderer::plain().render(&table).unwrap();
//! assert_eq!(
//!     out,
//!     "\
//! +---------+---------+
//! | Name    | Type    |
//! +---------+---------+
//! |    Noel |   Human |
//! |   David |  Cyborg |
//! | Pranava | Crusher |
//! +---------+---------+
//! "
//! );
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod measure;
pub mod render;
pub mod style;
pub mod table;

pub use cell::{render_cell, Justification};
pub use column::ColumnSpec;
pub use console::Color;
pub use error::GridError;
pub use measure::{is_zero_width, truncate_to_visual_length, visual_length};
pub use render::TableRenderer;
pub use style::{Colorize, ConsoleColorizer, Palette, PlainColorizer};
pub use table::Table;

/// Result type for gridprintlib operations
pub type Result<T> = std::result::Result<T, GridError>;

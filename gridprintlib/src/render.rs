//! Table layout: borders, header banner, column names, rows, row count.
//!
//! Rendering is a pure function of the table's current state. Nothing is
//! cached between calls; widths are recomputed on every render.
//!
//! Output without colors:
//!
//! ```text
//! -----------
//!  Employees |
//! +---------+---------+
//! | Name    | Type    |
//! +---------+---------+
//! |    Noel |   Human |
//! | Pranava | Crusher |
//! +---------+---------+
//! Count: 2
//! ```

use std::io::{self, Write};

use crate::cell::{render_cell, Justification};
use crate::measure::visual_length;
use crate::style::{Colorize, ConsoleColorizer, Palette, PlainColorizer};
use crate::table::Table;
use crate::Result;

/// Renders tables with a colorizer and a palette for header cells and rows.
#[derive(Debug, Clone)]
pub struct TableRenderer<C = ConsoleColorizer> {
    colorizer: C,
    column_palette: Palette,
    row_palette: Palette,
}

impl TableRenderer<ConsoleColorizer> {
    /// Renderer with console styling and the default palettes.
    pub fn new() -> Self {
        TableRenderer {
            colorizer: ConsoleColorizer::new(),
            column_palette: Palette::columns(),
            row_palette: Palette::rows(),
        }
    }
}

impl Default for TableRenderer<ConsoleColorizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer<PlainColorizer> {
    /// Renderer that never emits escape codes.
    pub fn plain() -> Self {
        TableRenderer::new().colorizer(PlainColorizer)
    }
}

impl<C: Colorize> TableRenderer<C> {
    /// Swap the colorizer, keeping the palettes.
    pub fn colorizer<D: Colorize>(self, colorizer: D) -> TableRenderer<D> {
        TableRenderer {
            colorizer,
            column_palette: self.column_palette,
            row_palette: self.row_palette,
        }
    }

    /// Colors for column-name cells, cycled by column position.
    pub fn column_palette(mut self, palette: Palette) -> Self {
        self.column_palette = palette;
        self
    }

    /// Colors for data rows, cycled by row position.
    pub fn row_palette(mut self, palette: Palette) -> Self {
        self.row_palette = palette;
        self
    }

    /// Render the whole table. Either the complete text is returned or an
    /// error; rows are re-checked for arity first.
    pub fn render(&self, table: &Table) -> Result<String> {
        table.validate()?;

        let widths = table.column_widths();
        let mut out = String::new();

        // The banner rule may be wider than the table; the upper border then
        // grows to meet it.
        let mut banner_len = 0;
        if let Some(header) = table.header() {
            let rule = "-".repeat(visual_length(header) + 2);
            out.push_str(&rule);
            out.push('\n');
            out.push_str(&format!(" {} |\n", header));
            banner_len = rule.len();
        }

        let border = border_line(&widths);
        let mut upper_border = border.clone();
        if banner_len > upper_border.len() {
            upper_border.push_str(&"-".repeat(banner_len - upper_border.len()));
        }
        out.push_str(&upper_border);
        out.push('\n');

        let names: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
        self.push_row(&mut out, &widths, &names, Justification::Left, |i| {
            self.column_palette.pick(i)
        });

        out.push_str(&border);
        out.push('\n');

        for (row_index, row) in table.rows().iter().enumerate() {
            let color = self.row_palette.pick(row_index);
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.push_row(&mut out, &widths, &cells, Justification::Right, |_| color);
        }

        out.push_str(&border);
        out.push('\n');

        if table.shows_row_count() {
            out.push_str(&format!("Count: {}\n", table.row_count()));
        }

        Ok(out)
    }

    /// Render and write to `writer`, followed by one blank line.
    pub fn write_to<W: Write>(&self, table: &Table, mut writer: W) -> Result<()> {
        let rendered = self.render(table)?;
        writeln!(writer, "{}", rendered)?;
        writer.flush()?;
        Ok(())
    }

    /// Render and write to stdout.
    pub fn print(&self, table: &Table) -> Result<()> {
        self.write_to(table, io::stdout().lock())
    }

    fn push_row(
        &self,
        out: &mut String,
        widths: &[usize],
        cells: &[&str],
        justification: Justification,
        color_at: impl Fn(usize) -> console::Color,
    ) {
        let rendered: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                render_cell(cell, width, justification, color_at(i), &self.colorizer)
            })
            .collect();

        out.push('|');
        out.push_str(&rendered.join("|"));
        out.push_str("|\n");
    }
}

/// `+-----+---+` with two dashes of margin per column.
fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

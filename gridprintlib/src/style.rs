//! Cell colorization.
//!
//! The renderer never talks to the terminal directly. Each padded cell is
//! handed to a [`Colorize`] implementation together with the color picked from
//! a [`Palette`]; [`PlainColorizer`] returns the text untouched and
//! [`ConsoleColorizer`] styles it with `console`, which turns itself off when
//! stdout is not a terminal or colors were disabled process-wide.

use console::{Color, Style};

use crate::error::GridError;
use crate::Result;

/// Applies a color attribute to an already padded cell.
pub trait Colorize {
    fn colorize(&self, text: &str, color: Color) -> String;
}

impl<F> Colorize for F
where
    F: Fn(&str, Color) -> String,
{
    fn colorize(&self, text: &str, color: Color) -> String {
        self(text, color)
    }
}

/// Identity colorizer. Output is byte-for-byte the uncolored table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColorizer;

impl Colorize for PlainColorizer {
    fn colorize(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

/// Bold foreground colors through `console::Style`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleColorizer {
    force: Option<bool>,
}

impl ConsoleColorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always (or never) emit escape codes, ignoring terminal detection.
    pub fn force_styling(mut self, enabled: bool) -> Self {
        self.force = Some(enabled);
        self
    }
}

impl Colorize for ConsoleColorizer {
    fn colorize(&self, text: &str, color: Color) -> String {
        let mut style = Style::new().fg(color).bold();
        if let Some(enabled) = self.force {
            style = style.force_styling(enabled);
        }
        style.apply_to(text).to_string()
    }
}

/// A non-empty, ordered list of colors picked by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(GridError::EmptyPalette);
        }
        Ok(Palette { colors })
    }

    /// Colors for header cells, one per column position.
    pub fn columns() -> Self {
        Palette {
            colors: vec![Color::Red, Color::Magenta, Color::Blue, Color::White],
        }
    }

    /// Colors for data rows, one per row position.
    pub fn rows() -> Self {
        Palette {
            colors: vec![Color::Yellow, Color::Green],
        }
    }

    /// Color at `position`, wrapping around the end of the palette.
    pub fn pick(&self, position: usize) -> Color {
        self.colors[position % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

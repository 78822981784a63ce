//! Loading table documents from JSON or delimited text

use anyhow::{anyhow, bail, Context};
use gridprintlib::{ColumnSpec, Table};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// How the input text is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A JSON table document
    Json,
    /// First line holds column names, each further line one row
    Delimited,
}

impl InputFormat {
    /// Guess the format from a file name: `.json` is JSON, anything else is
    /// delimited text.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            InputFormat::Json
        } else {
            InputFormat::Delimited
        }
    }
}

/// Everything needed to build a table.
#[derive(Debug, Deserialize)]
pub struct TableDocument {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub show_row_count: bool,
    pub columns: Vec<ColumnSpec>,
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub rows: Vec<Vec<String>>,
}

/// JSON cells may be any scalar; they are shown as their JSON text, with
/// strings unquoted and null empty.
fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let rows: Vec<Vec<Value>> = Vec::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl TableDocument {
    pub fn parse(text: &str, format: InputFormat, delimiter: char) -> anyhow::Result<Self> {
        match format {
            InputFormat::Json => Self::from_json(text),
            InputFormat::Delimited => Self::from_delimited(text, delimiter),
        }
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let document: TableDocument =
            serde_json::from_str(text).context("invalid table document")?;
        debug!(
            columns = document.columns.len(),
            rows = document.rows.len(),
            "parsed JSON document"
        );
        Ok(document)
    }

    /// Split lines on `delimiter`. Blank lines are skipped; there is no
    /// quoting, so cells cannot contain the delimiter.
    pub fn from_delimited(text: &str, delimiter: char) -> anyhow::Result<Self> {
        let mut lines = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty());

        let names = lines
            .next()
            .ok_or_else(|| anyhow!("input has no column names"))?;
        let columns = split_line(names, delimiter)
            .into_iter()
            .map(ColumnSpec::new)
            .collect::<Vec<_>>();
        let rows: Vec<Vec<String>> = lines.map(|line| split_line(line, delimiter)).collect();

        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "parsed delimited input"
        );
        Ok(TableDocument {
            header: None,
            show_row_count: false,
            columns,
            rows,
        })
    }

    /// Put a width limit on the named columns.
    pub fn limit_widths(&mut self, limits: &[(String, usize)]) -> anyhow::Result<()> {
        for (name, max_width) in limits {
            let column = self
                .columns
                .iter_mut()
                .find(|c| c.name() == name.as_str())
                .ok_or_else(|| anyhow!("no column named '{}'", name))?;
            *column = ColumnSpec::with_max_width(name.as_str(), *max_width)?;
        }
        Ok(())
    }

    pub fn into_table(self) -> gridprintlib::Result<Table> {
        let mut table = Table::new(self.columns)?;
        table.set_rows(self.rows)?;
        if let Some(header) = self.header {
            table.set_header(header);
        }
        table.show_row_count(self.show_row_count);
        Ok(table)
    }
}

fn split_line(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|cell| cell.trim().to_string()).collect()
}

/// Parse a `NAME=WIDTH` column limit.
pub fn parse_width_limit(arg: &str) -> Result<(String, usize), String> {
    let (name, width) = arg
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WIDTH, got '{}'", arg))?;
    if name.is_empty() {
        return Err(format!("missing column name in '{}'", arg));
    }
    let width = width
        .parse::<usize>()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    Ok((name.to_string(), width))
}

/// Read the whole input, from a file or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin().lock(), &mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    if !std::path::Path::new(path).exists() {
        bail!("path does not exist: {}", path);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path))
}

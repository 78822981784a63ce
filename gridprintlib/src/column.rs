//! Column definitions.

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::measure::visual_length;
use crate::Result;

/// Narrowest allowed max width is one more than the "..." ellipsis.
const ELLIPSIS_WIDTH: usize = 3;

/// A column with a display name and an optional maximum width.
///
/// A max width must be greater than 3 and no smaller than the visual length of
/// the name. Both rules are checked once, when the column is created (or
/// deserialized), so a `ColumnSpec` value is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColumnSpec")]
pub struct ColumnSpec {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_width: Option<usize>,
}

impl ColumnSpec {
    /// Create a column with no width limit.
    pub fn new(name: impl Into<String>) -> Self {
        ColumnSpec {
            name: name.into(),
            max_width: None,
        }
    }

    /// Create a column whose cells are truncated past `max_width`.
    pub fn with_max_width(name: impl Into<String>, max_width: usize) -> Result<Self> {
        let name = name.into();

        if max_width <= ELLIPSIS_WIDTH {
            return Err(GridError::MaxWidthTooSmall {
                column: name,
                max_width,
            });
        }
        if visual_length(&name) > max_width {
            return Err(GridError::NameExceedsMaxWidth {
                column: name,
                max_width,
            });
        }

        Ok(ColumnSpec {
            name,
            max_width: Some(max_width),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_width(&self) -> Option<usize> {
        self.max_width
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::new(name)
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::new(name)
    }
}

/// Unvalidated wire form: either a bare name or `{ "name", "max_width" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColumnSpec {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        max_width: Option<usize>,
    },
}

impl TryFrom<RawColumnSpec> for ColumnSpec {
    type Error = GridError;

    fn try_from(raw: RawColumnSpec) -> Result<Self> {
        match raw {
            RawColumnSpec::Name(name) => Ok(ColumnSpec::new(name)),
            RawColumnSpec::Full {
                name,
                max_width: None,
            } => Ok(ColumnSpec::new(name)),
            RawColumnSpec::Full {
                name,
                max_width: Some(max_width),
            } => ColumnSpec::with_max_width(name, max_width),
        }
    }
}

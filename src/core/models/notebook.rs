//! Jupyter notebook document (nbformat 4.5)
//!
//! Only what nbkit needs: building a notebook from code, writing it as
//! `.ipynb` JSON the way Jupyter does (one-space indent, source as a list of
//! lines), and reading one back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::paths::NOTEBOOK_EXT;

/// Major nbformat version written
pub const NBFORMAT: u32 = 4;

/// Minor nbformat version written (cell ids are required from 4.5)
pub const NBFORMAT_MINOR: u32 = 5;

/// Derive the notebook file name for a label
///
/// Whitespace and path separators become `_` and `.ipynb` is appended.
/// The same label always yields the same name.
#[must_use]
pub fn notebook_file_name(label: &str) -> String {
    let stem: String = label
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{stem}.{NOTEBOOK_EXT}")
}

/// Kind of a notebook cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    /// Executable code
    Code,
    /// Markdown text
    Markdown,
    /// Raw, unrendered text
    Raw,
}

/// A single notebook cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Code cell
    Code {
        /// Cell id
        id: String,
        /// Cell metadata
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Cell source text
        #[serde(with = "multiline")]
        source: String,
        /// Execution counter (`null` until run in Jupyter)
        #[serde(default)]
        execution_count: Option<u32>,
        /// Stored outputs
        #[serde(default)]
        outputs: Vec<Value>,
    },
    /// Markdown cell
    Markdown {
        /// Cell id
        id: String,
        /// Cell metadata
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Cell source text
        #[serde(with = "multiline")]
        source: String,
    },
    /// Raw cell
    Raw {
        /// Cell id
        id: String,
        /// Cell metadata
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Cell source text
        #[serde(with = "multiline")]
        source: String,
    },
}

impl Cell {
    /// Create a code cell that has not been executed
    #[must_use]
    pub fn code(source: impl Into<String>) -> Self {
        Self::Code {
            id: new_cell_id(),
            metadata: Map::new(),
            source: source.into(),
            execution_count: None,
            outputs: Vec::new(),
        }
    }

    /// Create a markdown cell
    #[must_use]
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::Markdown {
            id: new_cell_id(),
            metadata: Map::new(),
            source: source.into(),
        }
    }

    /// The cell kind
    #[must_use]
    pub const fn cell_type(&self) -> CellType {
        match self {
            Self::Code { .. } => CellType::Code,
            Self::Markdown { .. } => CellType::Markdown,
            Self::Raw { .. } => CellType::Raw,
        }
    }

    /// The cell source text
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Code { source, .. } | Self::Markdown { source, .. } | Self::Raw { source, .. } => {
                source
            },
        }
    }

    /// The cell id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Code { id, .. } | Self::Markdown { id, .. } | Self::Raw { id, .. } => id,
        }
    }
}

/// A notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Ordered cells
    pub cells: Vec<Cell>,
    /// Notebook metadata (kernelspec, language info)
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Major format version
    pub nbformat: u32,
    /// Minor format version
    pub nbformat_minor: u32,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    /// Create an empty notebook with a Python 3 kernelspec
    #[must_use]
    pub fn new() -> Self {
        let metadata = json!({
            "kernelspec": {
                "display_name": "Python 3",
                "language": "python",
                "name": "python3"
            },
            "language_info": {
                "name": "python"
            }
        });

        Self {
            cells: Vec::new(),
            metadata: match metadata {
                Value::Object(map) => map,
                _ => Map::new(),
            },
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Create a notebook holding a single code cell
    #[must_use]
    pub fn with_code_cell(code: impl Into<String>) -> Self {
        let mut notebook = Self::new();
        notebook.cells.push(Cell::code(code));
        notebook
    }

    /// Render as `.ipynb` JSON (one-space indent, trailing newline)
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parse `.ipynb` JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the notebook to a file, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a notebook from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

fn new_cell_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// nbformat "multiline string": written as a list of lines, read from
/// either a list or a single string
mod multiline {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Multiline {
        One(String),
        Lines(Vec<String>),
    }

    pub fn serialize<S: Serializer>(source: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(source.split_inclusive('\n'))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Multiline::deserialize(deserializer)? {
            Multiline::One(text) => text,
            Multiline::Lines(lines) => lines.concat(),
        })
    }
}

//! Global type definitions.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::error::Error;
use crate::Result;

/// Separator Convention
///
/// A field boundary is only recognised as the exact substring `string + field + string`.
/// There is no escaping: a quoted value containing that substring is split regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct Separators {
	pub field: String,
	pub string: String,
	pattern: String,
}

impl Separators {
	pub fn new(field: &str, string: &str) -> Result<Self> {
		if field.is_empty() {
			return Err(Error::InvalidSeparator);
		}
		Ok(Self {
			field: field.to_string(),
			string: string.to_string(),
			pattern: format!("{}{}{}", string, field, string),
		})
	}

	/// The full `quote + field + quote` pattern lines are split on.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}
}

impl Default for Separators {
	fn default() -> Self {
		Self {
			field: ",".to_string(),
			string: "\"".to_string(),
			pattern: "\",\"".to_string(),
		}
	}
}

/// Options controlling how a single input is read and projected.
#[derive(Debug, Clone)]
pub struct ReadOptions {
	pub separators: Separators,
	/// Lines starting with this are dropped. Empty disables comment filtering.
	pub comment: String,
	/// Whether the first non-comment line is a header.
	pub header: bool,
	/// Zero-based column indices in output order. Empty means all columns left to right.
	pub projection: Vec<usize>,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			separators: Separators::default(),
			comment: "#".to_string(),
			header: true,
			projection: Vec::new(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
	Header,
	Data,
}

/// One projected record, fields already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
	pub kind: RowKind,
	pub fields: Vec<String>,
}

impl Row {
	pub fn header(fields: Vec<String>) -> Self {
		Self {
			kind: RowKind::Header,
			fields,
		}
	}

	pub fn data(fields: Vec<String>) -> Self {
		Self {
			kind: RowKind::Data,
			fields,
		}
	}
}

/// Where a table's records come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
	Stdin,
	Path(PathBuf),
}

impl Input {
	/// Treats `-` as standard input.
	pub fn from_arg(arg: PathBuf) -> Self {
		if arg.as_os_str() == "-" {
			Input::Stdin
		} else {
			Input::Path(arg)
		}
	}

	pub fn open(&self) -> Result<Box<dyn Read>> {
		match self {
			Input::Stdin => Ok(Box::new(io::stdin())),
			Input::Path(path) => {
				let file = File::open(path).map_err(|source| Error::SourceUnavailable {
					name: path.display().to_string(),
					source,
				})?;
				Ok(Box::new(file))
			}
		}
	}
}

impl fmt::Display for Input {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Input::Stdin => write!(f, "<stdin>"),
			Input::Path(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Where the finished document is written.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
	Stdout,
	Path(PathBuf),
}

impl Output {
	pub fn create(&self) -> Result<Box<dyn Write>> {
		match self {
			Output::Stdout => Ok(Box::new(io::stdout())),
			Output::Path(path) => {
				let file = File::create(path).map_err(|source| Error::SourceUnavailable {
					name: path.display().to_string(),
					source,
				})?;
				Ok(Box::new(file))
			}
		}
	}
}

impl fmt::Display for Output {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Output::Stdout => write!(f, "<stdout>"),
			Output::Path(path) => write!(f, "{}", path.display()),
		}
	}
}

#[derive(Debug, Clone)]
pub struct DocumentOptions {
	pub page_title: String,
	/// Adds the zebra-stripe rules to the style block.
	pub color: bool,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			page_title: "Table".to_string(),
			color: true,
		}
	}
}

/// Everything a single invocation needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
	pub inputs: Vec<Input>,
	pub output: Output,
	/// `None` derives titles from file names, `Some(vec![])` means untitled tables.
	pub titles: Option<Vec<String>>,
	/// Stripped from file names when deriving titles. Empty disables stripping.
	pub extension: String,
	pub read: ReadOptions,
	pub document: DocumentOptions,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			inputs: vec![Input::Stdin],
			output: Output::Stdout,
			titles: None,
			extension: ".csv".to_string(),
			read: ReadOptions::default(),
			document: DocumentOptions::default(),
		}
	}
}

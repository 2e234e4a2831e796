//! Error types.

use thiserror::Error;

/// Errors which abort a conversion. None of these are recoverable: either every input is
/// rendered and a document is written, or nothing is.
#[derive(Error, Debug)]
pub enum Error {
	/// No non-comment lines, so the column count can't be determined.
	#[error("no data lines to infer a column count from")]
	EmptyInput,

	/// A projection index outside the detected columns, or a row too short for the projection.
	#[error("column index {index} is out of bounds ({columns} columns) on line {line}")]
	IndexOutOfBounds {
		index: usize,
		columns: usize,
		line: usize,
	},

	#[error("{titles} table titles given for {inputs} inputs")]
	TitleCountMismatch { titles: usize, inputs: usize },

	/// An input could not be opened or the output could not be created.
	#[error("cannot open '{name}': {source}")]
	SourceUnavailable {
		name: String,
		source: std::io::Error,
	},

	#[error("field separator must not be empty")]
	InvalidSeparator,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Attaches the name of the input being processed to an underlying error.
	#[error("{input}: {source}")]
	InInput {
		input: String,
		#[source]
		source: Box<Error>,
	},
}

impl Error {
	/// Wrap this error with the name of the input it came from.
	pub fn in_input(self, input: impl ToString) -> Self {
		Error::InInput {
			input: input.to_string(),
			source: Box::new(self),
		}
	}

	/// The underlying error kind, looking through any `InInput` wrappers.
	pub fn root(&self) -> &Error {
		match self {
			Error::InInput { source, .. } => source.root(),
			other => other,
		}
	}
}

//! Convert delimited text records into a styled HTML table document.
//!
//! Each input becomes one table, optionally captioned, and all tables are wrapped in a single
//! HTML page. Lines are split on the fixed pattern `quote + separator + quote`, so this is not
//! a full CSV parser: separators inside quoted values, embedded newlines and escaped quotes are
//! not supported. Field text is written into the markup verbatim.

pub mod error;
pub mod process;
pub mod render;
pub mod titles;
pub mod types;

pub use error::Error;
pub use process::{build_document, read_rows, run};
pub use types::{Config, DocumentOptions, Input, Output, ReadOptions, Row, RowKind, Separators};

pub type Result<T> = std::result::Result<T, Error>;

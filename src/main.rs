//! Program entrypoint and argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use csv_to_html::{process, Config, DocumentOptions, Input, Output, ReadOptions, Separators};

static KNOWN_BUGS: &str = "Known bugs:
  The number of columns is taken from the first row and can never change afterwards.";

/// Convert a CSV file to a HTML table
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = KNOWN_BUGS)]
struct Args {
	/// The title of the webpage (not printed on the actual page)
	#[arg(long, default_value = "Table")]
	page_title: String,

	/// Titles of the tables, one per input. If omitted the file names are used; if given with
	/// no values the tables are untitled
	#[arg(long, num_args = 0..)]
	table_title: Option<Vec<String>>,

	/// Turn off zebra striping
	#[arg(long)]
	no_color: bool,

	/// The string separating values
	#[arg(long, default_value = ",", allow_hyphen_values = true)]
	field_sep: String,

	/// The string surrounding a value
	#[arg(long, default_value = "\"", allow_hyphen_values = true)]
	string_sep: String,

	/// Lines starting with this are ignored
	#[arg(long, default_value = "#", allow_hyphen_values = true)]
	comment_char: String,

	/// Removed from file names when they are used as table titles
	#[arg(long, default_value = ".csv")]
	extension: String,

	/// The layout of a row as zero-based column indices, e.g. "4 3 2 1 0" prints a five
	/// column file backwards
	#[arg(long, num_args = 1..)]
	row_format: Vec<usize>,

	/// Treat the first row as data rather than column names
	#[arg(long)]
	no_header: bool,

	/// Where to save the document [default: standard output]
	#[arg(long)]
	output_file: Option<PathBuf>,

	/// Input files, `-` for standard input [default: standard input]
	input: Vec<PathBuf>,
}

impl Args {
	/// Resolve default streams once, so the library only sees explicit inputs and outputs.
	fn into_config(self) -> Result<Config> {
		let inputs = if self.input.is_empty() {
			vec![Input::Stdin]
		} else {
			self.input.into_iter().map(Input::from_arg).collect()
		};
		let output = match self.output_file {
			Some(path) => Output::Path(path),
			None => Output::Stdout,
		};
		Ok(Config {
			inputs,
			output,
			titles: self.table_title,
			extension: self.extension,
			read: ReadOptions {
				separators: Separators::new(&self.field_sep, &self.string_sep)?,
				comment: self.comment_char,
				header: !self.no_header,
				projection: self.row_format,
			},
			document: DocumentOptions {
				page_title: self.page_title,
				color: !self.no_color,
			},
		})
	}
}

fn main() -> Result<()> {
	env_logger::init();
	let config = Args::parse().into_config()?;
	log::debug!("{:?}", config);
	process::run(&config)?;
	Ok(())
}

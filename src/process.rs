//! Record reading, projection and the conversion pipeline.

use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use crate::error::Error;
use crate::types::{Config, ReadOptions, Row, Separators};
use crate::{render, titles, Result};

/// Run
///
/// Convert every input in `config` into one document and write it to the configured output.
/// The output is only created once all inputs have been read successfully, so a failure never
/// leaves a partial document behind.
pub fn run(config: &Config) -> Result<()> {
	let document = build_document(config)?;
	log::info!("Writing document to {}", config.output);
	let mut output = config.output.create()?;
	write_document(&mut output, &document).map_err(|e| match e {
		Error::Io(source) => Error::SourceUnavailable {
			name: config.output.to_string(),
			source,
		},
		other => other,
	})
}

/// Build Document
///
/// Read each input in turn, render it as a captioned table and wrap all tables in a single
/// document.
pub fn build_document(config: &Config) -> Result<String> {
	let titles = titles::resolve(&config.inputs, config.titles.as_deref(), &config.extension)?;
	let mut tables = Vec::with_capacity(config.inputs.len());
	for (input, title) in config.inputs.iter().zip(titles.iter()) {
		log::info!("Reading {}", input);
		let reader = input.open()?;
		let rows = read_rows(reader, &config.read).map_err(|e| match e {
			Error::Io(source) => Error::SourceUnavailable {
				name: input.to_string(),
				source,
			},
			other => other.in_input(input),
		})?;
		tables.push(render::table(&rows, title));
	}
	Ok(render::document(&tables, &config.document))
}

/// Read Rows
///
/// Read all lines from `input`, drop comments and project each remaining line onto
/// `options.projection`. The column count comes from the first remaining line and the
/// projection is checked against it once, before any row is produced. Later lines that are
/// too short for the projection fail when they are reached.
pub fn read_rows<R: Read>(input: R, options: &ReadOptions) -> Result<Vec<Row>> {
	let buffered = BufReader::new(input);
	let mut lines = Vec::new();
	for (i, line) in buffered.lines().enumerate() {
		let line = line?;
		if is_comment(&line, &options.comment) {
			log::debug!("Skipping comment on line {}", i + 1);
			continue;
		}
		lines.push((i + 1, line));
	}

	let (first_number, first_line) = lines.first().ok_or(Error::EmptyInput)?;
	let columns = split_line(first_line, &options.separators).len();
	log::debug!("Detected {} columns", columns);

	let projection: Vec<usize> = if options.projection.is_empty() {
		(0..columns).collect()
	} else {
		options.projection.clone()
	};
	if let Some(&max) = projection.iter().max() {
		if max >= columns {
			return Err(Error::IndexOutOfBounds {
				index: max,
				columns,
				line: *first_number,
			});
		}
	}

	let mut rows = Vec::with_capacity(lines.len());
	let mut lines = lines.into_iter();
	if options.header {
		if let Some((number, line)) = lines.next() {
			let fields = project(&line, number, &projection, &options.separators)?;
			rows.push(Row::header(fields));
		}
	}
	for (number, line) in lines {
		let fields = project(&line, number, &projection, &options.separators)?;
		rows.push(Row::data(fields));
	}
	Ok(rows)
}

fn is_comment(line: &str, comment: &str) -> bool {
	!comment.is_empty() && line.starts_with(comment)
}

/// Split Line
///
/// Split a line on the full `quote + field + quote` pattern. A line without that pattern is
/// taken to be unquoted and is split on the bare field separator. Fields are returned untrimmed.
pub fn split_line<'a>(line: &'a str, separators: &Separators) -> Vec<&'a str> {
	if line.contains(separators.pattern()) {
		line.split(separators.pattern()).collect()
	} else {
		line.split(separators.field.as_str()).collect()
	}
}

/// Clean Field
///
/// Trim surrounding whitespace, then one layer of the quote string from each end. Inner quotes
/// are kept.
pub fn clean_field<'a>(field: &'a str, quote: &str) -> &'a str {
	let field = field.trim();
	if quote.is_empty() {
		return field;
	}
	let field = field.strip_prefix(quote).unwrap_or(field);
	field.strip_suffix(quote).unwrap_or(field)
}

/// Project
///
/// Pick the fields of `line` at `projection`, in projection order.
fn project(
	line: &str,
	number: usize,
	projection: &[usize],
	separators: &Separators,
) -> Result<Vec<String>> {
	let fields = split_line(line, separators);
	projection
		.iter()
		.map(|&index| {
			fields
				.get(index)
				.map(|field| clean_field(field, &separators.string).to_string())
				.ok_or(Error::IndexOutOfBounds {
					index,
					columns: fields.len(),
					line: number,
				})
		})
		.collect()
}

/// Write Document
///
/// Write the rendered document to `wtr` (required trait bound `std::io::Write`).
pub fn write_document<W: Write>(wtr: &mut W, document: &str) -> Result<()> {
	let mut buffered = BufWriter::new(wtr);
	buffered.write_all(document.as_bytes())?;
	buffered.flush()?;
	Ok(())
}

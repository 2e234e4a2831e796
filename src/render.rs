//! HTML rendering of rows, tables and the enclosing document.
//!
//! Field text is inserted verbatim, no escaping is done.

use crate::types::{DocumentOptions, Row, RowKind};

static STYLE: &str = "table, th, td {
    border: 1px solid black;
    border-collapse: collapse;
}
th, td {
    padding: 5px;
    text-align: left;
}";

static STRIPES: &str = "
table#t01 tr:nth-child(even) {
    background-color: #eee;
}
table#t01 tr:nth-child(odd) {
   background-color:#fff;
}
table#t01 th    {
    background-color: #fff;
    color: black;
}
";

/// Placed after every table in a document.
pub static TABLE_BREAK: &str = "<br><!-- Table line break -->\n";

/// Cell
///
/// Render one field as a body cell.
pub fn cell(field: &str) -> String {
	format!("\t<td>{}</td>\n", field)
}

/// Header Cell
///
/// Render one field as a header cell.
pub fn header_cell(field: &str) -> String {
	format!("\t<th>{}</th>\n", field)
}

/// Row
///
/// Render every field of `row` as a cell (header cells for a header row) and wrap them once
/// in a table row.
pub fn row(row: &Row) -> String {
	let render_cell = match row.kind {
		RowKind::Header => header_cell,
		RowKind::Data => cell,
	};
	let cells: String = row.fields.iter().map(|field| render_cell(field)).collect();
	format!("<tr>\n{}</tr>\n", cells)
}

/// Table
///
/// Render `rows` in order into one table fragment. The caption is only emitted when `caption`
/// is non-empty.
pub fn table(rows: &[Row], caption: &str) -> String {
	let mut out = String::from("\n<table id=\"t01\">\n<!-- Table Begin -->\n");
	if !caption.is_empty() {
		out.push_str(&format!(
			"\n<caption style=\"font-size:30px\"><b>{}</b></caption>\n",
			caption
		));
	}
	for r in rows {
		out.push_str(&row(r));
	}
	out.push_str("\n</table><!-- Table End -->\n");
	out
}

/// Document
///
/// Join the table fragments, each followed by [`TABLE_BREAK`], and wrap the result exactly once
/// in the page shell with its title and style block.
pub fn document(tables: &[String], options: &DocumentOptions) -> String {
	let mut out = format!(
		"\n<!DOCTYPE html>\n<html>\n<head>\n\t<title>{}</title>\n\n<style>\n{}",
		options.page_title, STYLE
	);
	if options.color {
		out.push_str(STRIPES);
	}
	out.push_str("</style></head>\n<body>\n");
	for table in tables {
		out.push_str(table);
		out.push_str(TABLE_BREAK);
	}
	out.push_str("\n</body>\n</html>\n\n");
	out
}

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use csv_to_html::render::TABLE_BREAK;
use csv_to_html::{
	build_document, process, read_rows, Config, Error, Input, Output, ReadOptions, Row,
};

fn config(paths: &[&str]) -> Config {
	Config {
		inputs: paths.iter().map(|p| Input::Path(PathBuf::from(p))).collect(),
		..Config::default()
	}
}

#[test]
fn test_header_and_data_rows() -> Result<()> {
	let document = build_document(&config(&["tests/data/simple.csv"]))?;
	let expected_table = "\n<table id=\"t01\">\n<!-- Table Begin -->\n\
		\n<caption style=\"font-size:30px\"><b>simple</b></caption>\n\
		<tr>\n\t<th>a</th>\n\t<th>b</th>\n\t<th>c</th>\n</tr>\n\
		<tr>\n\t<td>1</td>\n\t<td>2</td>\n\t<td>3</td>\n</tr>\n\
		\n</table><!-- Table End -->\n";
	assert!(document.contains(&format!("{}{}", expected_table, TABLE_BREAK)));
	assert!(document.starts_with("\n<!DOCTYPE html>\n<html>\n<head>\n\t<title>Table</title>\n"));
	assert!(document.ends_with("\n</body>\n</html>\n\n"));
	assert_eq!(document.matches("<table").count(), 1);
	assert_eq!(document.matches("<head>").count(), 1);
	Ok(())
}

#[test]
fn test_projection() -> Result<()> {
	let mut config = config(&["tests/data/simple.csv"]);
	config.read.projection = vec![2, 0];
	let document = build_document(&config)?;
	assert!(document.contains("<tr>\n\t<th>c</th>\n\t<th>a</th>\n</tr>\n"));
	assert!(document.contains("<tr>\n\t<td>3</td>\n\t<td>1</td>\n</tr>\n"));
	Ok(())
}

#[test]
fn test_unquoted_input_with_comment() -> Result<()> {
	let rows = read_rows(&b"a,b,c\n# 9,9,9\n1,2,3\n"[..], &ReadOptions::default())?;
	assert_eq!(
		rows,
		vec![
			Row::header(vec!["a".into(), "b".into(), "c".into()]),
			Row::data(vec!["1".into(), "2".into(), "3".into()]),
		]
	);
	Ok(())
}

#[test]
fn test_mixed_quoting() -> Result<()> {
	let document = build_document(&config(&["tests/data/mixed.csv"]))?;
	assert!(document.contains("\t<th>city, state</th>\n"));
	assert!(document.contains("<tr>\n\t<td>Ann</td>\n\t<td>Reno</td>\n\t<td>7</td>\n</tr>\n"));
	assert!(document.contains("<tr>\n\t<td>Bob</td>\n\t<td>Ely, NV</td>\n\t<td>9</td>\n</tr>\n"));
	Ok(())
}

#[test]
fn test_quoted_with_comments() -> Result<()> {
	let document = build_document(&config(&["tests/data/quoted.csv"]))?;
	assert!(!document.contains("exported"));
	assert!(!document.contains("skipped"));
	assert!(document.contains("\t<th>city, state</th>\n"));
	assert!(document.contains("<tr>\n\t<td>Bob</td>\n\t<td>Ely, NV</td>\n\t<td>9</td>\n</tr>\n"));
	assert!(document.contains("<b>quoted</b></caption>"));
	Ok(())
}

#[test]
fn test_multiple_inputs_share_one_document() -> Result<()> {
	let document = build_document(&config(&[
		"tests/data/simple.csv",
		"tests/data/quoted.csv",
		"tests/data/simple.csv",
	]))?;
	assert_eq!(document.matches("<head>").count(), 1);
	assert_eq!(document.matches("<style>").count(), 1);
	assert_eq!(document.matches("<table").count(), 3);
	assert_eq!(document.matches(TABLE_BREAK).count(), 3);
	let simple = document.find("<b>simple</b>").unwrap();
	let quoted = document.find("<b>quoted</b>").unwrap();
	assert!(simple < quoted);
	Ok(())
}

#[test]
fn test_untitled_tables() -> Result<()> {
	let mut config = config(&["tests/data/simple.csv", "tests/data/quoted.csv"]);
	config.titles = Some(Vec::new());
	let document = build_document(&config)?;
	assert!(!document.contains("<caption"));
	Ok(())
}

#[test]
fn test_no_header_no_color() -> Result<()> {
	let mut config = config(&["tests/data/simple.csv"]);
	config.read = ReadOptions {
		header: false,
		..ReadOptions::default()
	};
	config.document.color = false;
	let document = build_document(&config)?;
	assert!(!document.contains("<th>"));
	assert!(document.contains("\t<td>a</td>\n"));
	assert!(!document.contains("nth-child"));
	Ok(())
}

#[test]
fn test_failures() {
	let cases: [(&str, fn(&Error) -> bool); 4] = [
		("tests/data/short-row.csv", |e| {
			matches!(e, Error::IndexOutOfBounds { line: 3, .. })
		}),
		("tests/data/comments-only.csv", |e| matches!(e, Error::EmptyInput)),
		("tests/data/missing.csv", |e| {
			matches!(e, Error::SourceUnavailable { .. })
		}),
		("tests/data/invalid-utf8.csv", |e| {
			matches!(e, Error::SourceUnavailable { .. })
		}),
	];
	for (path, expected) in cases.iter() {
		let result = build_document(&config(&[*path]));
		match result {
			Err(e) => assert!(expected(e.root()), "{}: unexpected error {:?}", path, e),
			Ok(_) => panic!("{}: expected an error", path),
		}
	}
}

#[test]
fn test_too_few_titles() {
	let mut config = config(&["tests/data/simple.csv", "tests/data/quoted.csv"]);
	config.titles = Some(vec!["Only one".to_string()]);
	let result = build_document(&config);
	assert!(matches!(
		result,
		Err(Error::TitleCountMismatch {
			titles: 1,
			inputs: 2
		})
	));
}

#[test]
fn test_run_writes_output_file() -> Result<()> {
	let path = std::env::temp_dir().join(format!("csv-to-html-{}.html", std::process::id()));
	let mut config = config(&["tests/data/simple.csv"]);
	config.output = Output::Path(path.clone());
	process::run(&config)?;
	let written = fs::read_to_string(&path)?;
	fs::remove_file(&path)?;
	assert_eq!(written, build_document(&config)?);
	Ok(())
}

#[test]
fn test_run_failure_writes_nothing() {
	let path = std::env::temp_dir().join(format!("csv-to-html-fail-{}.html", std::process::id()));
	let mut config = config(&["tests/data/simple.csv", "tests/data/short-row.csv"]);
	config.output = Output::Path(path.clone());
	assert!(process::run(&config).is_err());
	assert!(!path.exists());
}

#[test]
#[cfg(target_os = "linux")]
fn test_failed_write_is_source_unavailable() {
	let mut config = config(&["tests/data/simple.csv"]);
	config.output = Output::Path(PathBuf::from("/dev/full"));
	let result = process::run(&config);
	assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
}

//! Table title resolution.

use std::path::is_separator;

use crate::error::Error;
use crate::types::Input;
use crate::Result;

/// Resolve
///
/// Produce one title per input. With no titles given (`None`) they are derived from the file
/// names; standard input gets an empty title and hence no caption. An explicitly empty list
/// is padded with empty titles. Anything else is used as given, and must cover every input.
pub fn resolve(inputs: &[Input], titles: Option<&[String]>, extension: &str) -> Result<Vec<String>> {
	let resolved = match titles {
		None => inputs.iter().map(|input| derive(input, extension)).collect(),
		Some([]) => vec![String::new(); inputs.len()],
		Some(titles) => titles.to_vec(),
	};
	if resolved.len() < inputs.len() {
		return Err(Error::TitleCountMismatch {
			titles: resolved.len(),
			inputs: inputs.len(),
		});
	}
	log::debug!("Table titles {:?}", resolved);
	Ok(resolved)
}

fn derive(input: &Input, extension: &str) -> String {
	match input {
		Input::Stdin => String::new(),
		Input::Path(path) => from_file_name(&path.to_string_lossy(), extension),
	}
}

/// From File Name
///
/// Strip `extension` only if it ends the name, then drop any leading directories.
pub fn from_file_name(name: &str, extension: &str) -> String {
	let stem = if extension.is_empty() {
		name
	} else {
		name.strip_suffix(extension).unwrap_or(name)
	};
	stem.rsplit(is_separator).next().unwrap_or(stem).to_string()
}

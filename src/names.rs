use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{PeopleError, Result};

/// Reads the tab-separated first names file. Every line contributes the
/// names found in columns 1 and 3.
pub fn get_first_names(path: &Path) -> Result<Vec<String>> {
    tracing::debug!("Loading first names from {}", path.display());
    let file = File::open(path).map_err(|e| PeopleError::io(path, e))?;
    parse_first_names(BufReader::new(file)).map_err(|e| attach_path(e, path))
}

/// Reads the space-separated last names file, keeping the first token of
/// each line in capitalized form.
pub fn get_last_names(path: &Path) -> Result<Vec<String>> {
    tracing::debug!("Loading last names from {}", path.display());
    let file = File::open(path).map_err(|e| PeopleError::io(path, e))?;
    parse_last_names(BufReader::new(file)).map_err(|e| attach_path(e, path))
}

pub fn parse_first_names(reader: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PeopleError::io("<first names>", e))?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            return Err(PeopleError::MissingField {
                line: i + 1,
                found: fields.len(),
            });
        }
        names.push(fields[1].to_string());
        names.push(fields[3].to_string());
    }
    Ok(names)
}

pub fn parse_last_names(reader: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| PeopleError::io("<last names>", e))?;
        let token = line.split(' ').next().unwrap_or_default();
        names.push(capitalize(&token.to_lowercase()));
    }
    Ok(names)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Read errors from the pure parsers carry a placeholder path
fn attach_path(err: PeopleError, path: &Path) -> PeopleError {
    match err {
        PeopleError::Io { source, .. } => PeopleError::io(path, source),
        other => other,
    }
}

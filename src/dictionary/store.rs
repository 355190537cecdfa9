//! Reading and writing locale files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{
    Dictionary,
    DictionaryError,
};

/// Indentation used for every written locale file.
const INDENT: &[u8] = b"    ";

/// Load a locale file.
///
/// # Errors
/// - [`DictionaryError::Read`] if the file cannot be read
/// - [`DictionaryError::Parse`] if it is not a flat JSON object of strings
pub fn load(path: &Path) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)
        .map_err(|source| DictionaryError::Read { path: path.to_path_buf(), source })?;
    parse(path, &content)
}

/// Load a locale file, treating a missing file as an empty dictionary.
///
/// # Errors
/// Same as [`load`], except for a file that does not exist.
pub fn load_or_default(path: &Path) -> Result<Dictionary, DictionaryError> {
    match fs::read_to_string(path) {
        Ok(content) => parse(path, &content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Locale file not found, starting empty");
            Ok(Dictionary::new())
        }
        Err(source) => Err(DictionaryError::Read { path: path.to_path_buf(), source }),
    }
}

fn parse(path: &Path, content: &str) -> Result<Dictionary, DictionaryError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    // An empty file is what `touch lang/fr.json` leaves behind.
    if content.trim().is_empty() {
        return Ok(Dictionary::new());
    }
    serde_json::from_str(content)
        .map_err(|source| DictionaryError::Parse { path: path.to_path_buf(), source })
}

/// Serialize a dictionary as 4-space indented JSON, without a trailing newline.
///
/// # Errors
/// Returns [`DictionaryError::Serialize`] if serialization fails.
pub fn to_json(dictionary: &Dictionary) -> Result<String, DictionaryError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    dictionary.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrite `path` with the serialized dictionary, creating parent directories.
///
/// # Errors
/// - [`DictionaryError::Serialize`] if serialization fails
/// - [`DictionaryError::Write`] if the file or its parent cannot be written
pub fn save(path: &Path, dictionary: &Dictionary) -> Result<(), DictionaryError> {
    let json = to_json(dictionary)?;
    let write_error = |source| DictionaryError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, json).map_err(write_error)
}

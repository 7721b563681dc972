use std::fs;
use std::path::Path;

use log::warn;
use serde_json::Value;

use crate::utils::print_error;

/// Point-in-time bundle of the page state the extraction rules read. Keeping
/// every ambient input explicit here means the extraction core never touches
/// the network or the filesystem.
pub struct PageSnapshot {
    /// Raw query component of the page URL, without the leading `?`.
    pub query: String,
    /// Cookie string in `name=value; name2=value2` form.
    pub cookies: String,
    pub local_storage: Vec<String>,
    pub session_storage: Vec<String>,
    /// Raw HTML of the rendered page.
    pub html: String,
}

/// Reads a storage dump file and returns its key names. A missing or
/// malformed dump is reported and treated as an empty source so the
/// remaining extraction rules still run.
pub fn load_storage_keys(path: Option<&Path>, verbose: bool) -> Vec<String> {
    let path = match path {
        Some(path) => path,
        None => return Vec::new(),
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            print_error(
                verbose,
                &format!("Error reading storage dump: {}", path.display()),
                &e,
            );
            warn!("Storage dump {} unreadable, treating as empty: {}", path.display(), e);
            return Vec::new();
        }
    };

    match parse_storage_keys(&text) {
        Ok(keys) => keys,
        Err(e) => {
            print_error(
                verbose,
                &format!("Error parsing storage dump: {}", path.display()),
                &e,
            );
            warn!("Storage dump {} invalid, treating as empty: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Accepts either a devtools-style `{"key": "value"}` object or a plain
/// `["key", ...]` array; only key names are kept, values are discarded.
pub fn parse_storage_keys(text: &str) -> Result<Vec<String>, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    let keys = match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(key) => Some(key),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(keys)
}

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::form_urlencoded;

use crate::snapshot::PageSnapshot;

/// Insertion-ordered set of parameter names. Uniqueness is the invariant;
/// order is kept so repeated runs over the same page print identical output.
pub struct Wordlist {
    seen: HashSet<String>,
    entries: Vec<String>,
}

impl Wordlist {
    pub fn new() -> Self {
        Wordlist {
            seen: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Inserts a name unless it is blank or already present.
    pub fn insert(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if self.seen.insert(name.to_string()) {
            self.entries.push(name.to_string());
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One name per line, no trailing newline.
    pub fn joined(&self) -> String {
        self.entries.join("\n")
    }
}

/// Runs the seven extraction rules over a page snapshot: query keys,
/// cookie names, local and session storage keys, meta tag names,
/// data-attribute names, form field names.
pub fn collect_params(snapshot: &PageSnapshot) -> Wordlist {
    let mut wordlist = Wordlist::new();

    query_keys(&snapshot.query, &mut wordlist);
    cookie_keys(&snapshot.cookies, &mut wordlist);
    storage_keys(&snapshot.local_storage, &mut wordlist);
    storage_keys(&snapshot.session_storage, &mut wordlist);

    let document = Html::parse_document(&snapshot.html);
    meta_names(&document, &mut wordlist);
    data_attribute_names(&document, &mut wordlist);
    form_field_names(&document, &mut wordlist);

    wordlist
}

fn query_keys(query: &str, out: &mut Wordlist) {
    for (key, _) in form_urlencoded::parse(query.as_bytes()) {
        out.insert(&key);
    }
}

/// Cookie names from a `name=value; name2=value2` string. An entry with no
/// `=` contributes its whole trimmed text.
fn cookie_keys(cookies: &str, out: &mut Wordlist) {
    for entry in cookies.split(';') {
        let name = match entry.split_once('=') {
            Some((name, _)) => name,
            None => entry,
        };
        out.insert(name);
    }
}

fn storage_keys(keys: &[String], out: &mut Wordlist) {
    for key in keys {
        out.insert(key);
    }
}

/// `name` wins over `property` when a meta tag carries both.
fn meta_names(document: &Html, out: &mut Wordlist) {
    let selector = Selector::parse("meta[name], meta[property]").unwrap();
    for element in document.select(&selector) {
        let value = element
            .value()
            .attr("name")
            .or_else(|| element.value().attr("property"));
        if let Some(name) = value {
            out.insert(name);
        }
    }
}

fn data_attribute_names(document: &Html, out: &mut Wordlist) {
    let selector = Selector::parse("*").unwrap();
    for element in document.select(&selector) {
        for (name, _) in element.value().attrs() {
            if name.starts_with("data-") {
                out.insert(name);
            }
        }
    }
}

fn form_field_names(document: &Html, out: &mut Wordlist) {
    let selector = Selector::parse("input[name], select[name], textarea[name]").unwrap();
    for element in document.select(&selector) {
        if let Some(name) = element.value().attr("name") {
            out.insert(name);
        }
    }
}

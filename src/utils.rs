use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;

use url::Url;

pub const DEFAULT_WORDLIST_NAME: &str = "parameters_wordlist.txt";

pub fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

pub fn read_stdin_lines() -> io::Lines<io::BufReader<io::Stdin>> {
    io::BufReader::new(io::stdin()).lines()
}

pub fn print_error(verbose: bool, msg: &str, err: &dyn std::fmt::Display) {
    if verbose {
        eprintln!("{}: {}", msg, err);
    }
}

/// Writes the wordlist verbatim; the handle is scoped to this call.
pub fn write_wordlist(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}

/// Per-host wordlist name for multi-target runs, so pages never share an
/// output file, e.g. `example.com_parameters_wordlist.txt`.
pub fn derive_output_name(url: &Url) -> String {
    let host = url.host_str().unwrap_or("page");
    match url.port() {
        Some(port) => format!("{}_{}_{}", host, port, DEFAULT_WORDLIST_NAME),
        None => format!("{}_{}", host, DEFAULT_WORDLIST_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_name_includes_host() {
        let url = Url::parse("https://example.com/path?a=1").unwrap();
        assert_eq!(derive_output_name(&url), "example.com_parameters_wordlist.txt");
    }

    #[test]
    fn derived_name_includes_non_default_port() {
        let url = Url::parse("http://example.com:8080/").unwrap();
        assert_eq!(
            derive_output_name(&url),
            "example.com_8080_parameters_wordlist.txt"
        );
    }

    #[test]
    fn wordlist_is_written_verbatim() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_WORDLIST_NAME);
        write_wordlist(&path, "id\nref").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id\nref");
    }
}

use std::path::PathBuf;

use colored::*;
use log::{error, info};
use reqwest::header::SET_COOKIE;
use reqwest::Client;
use url::Url;

use crate::extract::collect_params;
use crate::snapshot::PageSnapshot;
use crate::utils::{derive_output_name, print_error, write_wordlist, DEFAULT_WORDLIST_NAME};

/// Inputs shared by every target in a run: user-supplied ambient page state
/// plus output placement.
pub struct HarvestContext {
    pub cookies: Option<String>,
    pub local_storage: Vec<String>,
    pub session_storage: Vec<String>,
    pub output: Option<PathBuf>,
    pub single_target: bool,
}

/// Fetches one target, assembles its page snapshot, extracts the parameter
/// wordlist and delivers it to stdout plus a wordlist file.
pub async fn harvest_page(client: &Client, target: &str, verbose: bool, context: &HarvestContext) {
    let parsed_url = match Url::parse(target) {
        Ok(url) => url,
        Err(e) => {
            print_error(verbose, &format!("Error parsing URL: {}", target), &e);
            error!("Error parsing URL: {}: {}", target, e);
            return;
        }
    };

    let response = match client.get(target).send().await {
        Ok(resp) => resp,
        Err(e) => {
            print_error(verbose, &format!("Error fetching target: {}", target), &e);
            error!("Error fetching target: {}: {}", target, e);
            return;
        }
    };

    let mut cookie_pairs: Vec<String> = Vec::new();
    if let Some(extra) = &context.cookies {
        cookie_pairs.push(extra.clone());
    }
    for value in response.headers().get_all(SET_COOKIE) {
        if let Ok(raw) = value.to_str() {
            // Only the leading name=value pair; Path, Expires and friends are
            // cookie attributes, not cookie names.
            let pair = leading_cookie_pair(raw);
            if !pair.is_empty() {
                cookie_pairs.push(pair.to_string());
            }
        }
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            print_error(verbose, &format!("Error reading response body from: {}", target), &e);
            error!("Error reading response body from {}: {}", target, e);
            return;
        }
    };

    let snapshot = PageSnapshot {
        query: parsed_url.query().unwrap_or("").to_string(),
        cookies: cookie_pairs.join("; "),
        local_storage: context.local_storage.clone(),
        session_storage: context.session_storage.clone(),
        html: body,
    };

    let wordlist = collect_params(&snapshot);
    info!("Collected {} parameter names from {}", wordlist.len(), target);

    if wordlist.is_empty() {
        println!("{} {}", "No parameters found on".yellow(), target);
        return;
    }

    println!("{}", wordlist.joined());

    let path = if context.single_target {
        context
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDLIST_NAME))
    } else {
        PathBuf::from(derive_output_name(&parsed_url))
    };

    match write_wordlist(&path, &wordlist.joined()) {
        Ok(()) => println!(
            "{} {} parameters from {} -> {}",
            "Saved".green().bold(),
            wordlist.len(),
            target,
            path.display()
        ),
        Err(e) => {
            print_error(
                verbose,
                &format!("Error writing wordlist to {}", path.display()),
                &e,
            );
            error!("Error writing wordlist to {}: {}", path.display(), e);
        }
    }
}

fn leading_cookie_pair(raw: &str) -> &str {
    match raw.split_once(';') {
        Some((pair, _)) => pair.trim(),
        None => raw.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::leading_cookie_pair;

    #[test]
    fn set_cookie_attributes_are_stripped() {
        assert_eq!(
            leading_cookie_pair("session=abc; Path=/; HttpOnly"),
            "session=abc"
        );
    }

    #[test]
    fn bare_pair_is_kept() {
        assert_eq!(leading_cookie_pair("theme=dark"), "theme=dark");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(leading_cookie_pair(" lang=en ; Secure"), "lang=en");
    }
}

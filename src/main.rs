mod extract;
mod harvest;
mod opt;
mod snapshot;
mod utils;

use harvest::{harvest_page, HarvestContext};
use opt::Opt;
use snapshot::load_storage_keys;
use utils::{print_error, read_lines, read_stdin_lines};

use colored::*;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::sync::Arc;
use structopt::StructOpt;

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();
    if opt.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    println!("{}", "PARAM HARVEST - Collecting parameter names...".green().bold());

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to build HTTP client");

    let verbose = opt.verbose;

    let targets: Vec<String> = if !opt.targets.is_empty() {
        opt.targets
    } else if let Some(file_path) = opt.file {
        match read_lines(&file_path) {
            Ok(lines) => lines.filter_map(|line| line.ok()).collect(),
            Err(e) => {
                print_error(verbose, &format!("Error reading file: {}", file_path), &e);
                eprintln!("{}", "Could not read the target file".red());
                return;
            }
        }
    } else {
        read_stdin_lines().filter_map(|line| line.ok()).collect()
    };

    let live_targets = targets.iter().filter(|t| !t.trim().is_empty()).count();
    if live_targets == 0 {
        eprintln!(
            "{}",
            "No targets provided (pass URLs as arguments, via --file or on stdin)".red()
        );
        return;
    }

    let context = Arc::new(HarvestContext {
        cookies: opt.cookies,
        local_storage: load_storage_keys(opt.local_storage.as_deref(), verbose),
        session_storage: load_storage_keys(opt.session_storage.as_deref(), verbose),
        output: opt.output,
        single_target: live_targets == 1,
    });

    stream::iter(targets)
        .map(|target| {
            let client = client.clone();
            let context = Arc::clone(&context);
            async move {
                let target = target.trim().to_string();
                if target.is_empty() {
                    return;
                }
                harvest_page(&client, &target, verbose, &context).await;
            }
        })
        .buffer_unordered(opt.concurrency)
        .for_each(|_| async {})
        .await;
}

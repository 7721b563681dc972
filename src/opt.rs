use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "paramharvest",
    about = "Collects candidate parameter names from web pages into a fuzzing wordlist"
)]
pub struct Opt {
    #[structopt(help = "Target URLs; read from --file or stdin when omitted")]
    pub targets: Vec<String>,

    #[structopt(short, long, help = "Path to a file containing target URLs, one per line")]
    pub file: Option<String>,

    #[structopt(
        short,
        long,
        parse(from_os_str),
        help = "Wordlist output path (single target only, default parameters_wordlist.txt)"
    )]
    pub output: Option<PathBuf>,

    #[structopt(
        long,
        help = "Cookie string to treat as the page's cookies, e.g. 'session=abc; theme=dark'"
    )]
    pub cookies: Option<String>,

    #[structopt(
        long,
        parse(from_os_str),
        help = "JSON dump of the page's local storage (object or array of keys)"
    )]
    pub local_storage: Option<PathBuf>,

    #[structopt(
        long,
        parse(from_os_str),
        help = "JSON dump of the page's session storage (object or array of keys)"
    )]
    pub session_storage: Option<PathBuf>,

    #[structopt(short, long, default_value = "10", help = "Sets the level of concurrency")]
    pub concurrency: usize,

    #[structopt(short, long, help = "Activates verbose mode")]
    pub verbose: bool,
}

// flexrule-cli: shared utilities for CLI tools.

pub mod batch;

use std::path::PathBuf;
use std::process;

use flexrule_lexicon::Lexicon;
use flexrule_regex::{PunctuationMode, RuleOptions};

/// Environment variable naming a lexicon file.
pub const LEXICON_ENV: &str = "FLEXRULE_LEXICON";

/// Default lexicon file name.
const LEXICON_FILE: &str = "lexicon.tsv";

/// Load the lexicon used as the morphological analyzer.
///
/// An explicit `lexicon_path` must load successfully. Otherwise the search
/// order is:
/// 1. `FLEXRULE_LEXICON` environment variable
/// 2. `~/.flexrule/lexicon.tsv`
/// 3. `lexicon.tsv` in the current working directory
///
/// When no lexicon is found an empty one is returned: every word then
/// yields a pattern matching only itself.
pub fn load_lexicon(lexicon_path: Option<&str>) -> Result<Lexicon, String> {
    if let Some(path) = lexicon_path {
        return Lexicon::load(path).map_err(|e| format!("failed to load lexicon: {e}"));
    }

    let search_paths = build_search_paths();
    for path in &search_paths {
        if path.is_file() {
            return Lexicon::load(path).map_err(|e| format!("failed to load lexicon: {e}"));
        }
    }

    log::warn!(
        "no lexicon found in any of the search paths; words will not be inflected:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    );
    Ok(Lexicon::new())
}

/// Build the list of lexicon files to try.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(LEXICON_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".flexrule").join(LEXICON_FILE));
    }

    // Fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Remove a valued option (`--long=VALUE`, `--long VALUE` or `-s VALUE`)
/// from the arguments.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn take_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let prefix = format!("{long}=");
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse a `--lexicon=PATH` or `-l PATH` argument.
pub fn parse_lexicon_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    take_option(args, "--lexicon", "-l")
}

/// Build rule options from `--no-ocr` and `--escape-punct` flags.
pub fn parse_rule_options(args: &[String]) -> RuleOptions {
    let mut options = RuleOptions::default();
    if has_flag(args, "--no-ocr") {
        options = options.with_ocr(false);
    }
    if has_flag(args, "--escape-punct") {
        options = options.with_punctuation(PunctuationMode::Escaped);
    }
    options
}

/// Check whether a flag is present.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Initialize logging. `RUST_LOG` is honored; `debug` forces debug level.
pub fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None);
    // A second initialization (e.g. from tests) is harmless
    let _ = builder.try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

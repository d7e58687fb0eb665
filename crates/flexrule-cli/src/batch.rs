// Batch conversion of text files into rule files
//
// Every `*.txt` file directly inside a directory is read line by line, each
// line is converted into a rule, and the rules are written to a sibling
// file with the `.rules` extension. Files are converted in parallel, with a
// file-count progress bar on stderr when it is a terminal.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::prelude::*;

use flexrule_core::analysis::Analyzer;
use flexrule_regex::RuleBuilder;

/// Extension of input files.
pub const INPUT_EXTENSION: &str = "txt";

/// Extension of generated rule files.
pub const RULES_EXTENSION: &str = "rules";

/// Error type for batch conversion.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

impl BatchError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        BatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of converting a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Rule files written.
    pub written: Vec<PathBuf>,
    /// Input files that could not be converted.
    pub failed: Vec<(PathBuf, BatchError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Path of the rule file generated for `input`.
pub fn rules_path(input: &Path) -> PathBuf {
    input.with_extension(RULES_EXTENSION)
}

/// List the `*.txt` files directly inside `dir`, sorted by path.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::NotADirectory(dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| BatchError::io(dir, e))? {
        let path = entry.map_err(|e| BatchError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == INPUT_EXTENSION) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Convert text into rules, one rule per `\n`-separated line.
///
/// Line structure is preserved, including empty lines and a trailing
/// newline. A `\r` before the newline is dropped.
pub fn convert_text<A: Analyzer>(text: &str, builder: &RuleBuilder<A>) -> String {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let rule = builder.line(line);
            log::debug!("source line: {line}");
            log::debug!("rule line:   {rule}");
            rule
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert one input file and write its rule file. Returns the rule file path.
pub fn convert_file<A: Analyzer>(
    input: &Path,
    builder: &RuleBuilder<A>,
) -> Result<PathBuf, BatchError> {
    log::debug!("reading file: {}", input.display());
    let text = std::fs::read_to_string(input).map_err(|e| BatchError::io(input, e))?;
    let rules = convert_text(&text, builder);

    let output = rules_path(input);
    std::fs::write(&output, rules).map_err(|e| BatchError::io(&output, e))?;
    Ok(output)
}

/// Progress bar counting `len` files on stderr.
///
/// The bar is hidden unless `show` is set and stderr is a terminal.
pub fn progress_bar(len: u64, show: bool) -> ProgressBar {
    if !show || !std::io::stderr().is_terminal() {
        return ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden());
    }

    let bar = ProgressBar::new(len);
    let template = "[{bar:40.cyan/blue}] {pos}/{len} files ({eta})";
    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars("=>-")),
        Err(e) => log::warn!("invalid progress template: {e}"),
    }
    bar
}

/// Convert every input file in `dir`, in parallel.
///
/// A failing file does not stop the others; failures are collected in the
/// report. With `show_progress`, finished files are counted on a progress
/// bar (see [`progress_bar`]).
pub fn convert_directory<A>(
    dir: &Path,
    builder: &RuleBuilder<A>,
    show_progress: bool,
) -> Result<BatchReport, BatchError>
where
    A: Analyzer + Sync,
{
    let inputs = list_inputs(dir)?;
    log::info!("converting {} files in {}", inputs.len(), dir.display());

    let progress = progress_bar(inputs.len() as u64, show_progress);
    let results: Vec<(PathBuf, Result<PathBuf, BatchError>)> = inputs
        .into_par_iter()
        .map(|input| {
            let result = convert_file(&input, builder);
            progress.inc(1);
            (input, result)
        })
        .collect();
    progress.finish_and_clear();

    let mut report = BatchReport::default();
    for (input, result) in results {
        match result {
            Ok(output) => report.written.push(output),
            Err(e) => {
                log::error!("failed to convert {}: {e}", input.display());
                report.failed.push((input, e));
            }
        }
    }
    Ok(report)
}

// flexrule-convert: Convert a directory of text files into rule files.
//
// Every `*.txt` file directly inside DIR is read line by line and each line
// is turned into a rule matching any case inflection of its words. The rules
// are written next to the input with the `.rules` extension. Progress is
// shown on stderr when it is a terminal and --debug is not set.
//
// Usage:
//   flexrule-convert -d DIR [-l LEXICON] [OPTIONS]
//
// Options:
//   -d, --directory DIR    Directory with input files
//   -l, --lexicon PATH     Lexicon file (.tsv or .json)
//   --no-ocr               Do not widen OCR-confusable letters
//   --escape-punct         Escape trailing punctuation in patterns
//   --debug                Log every source line and its rule (hides progress)
//   -h, --help             Print help

use std::path::Path;

use flexrule_cli::batch::convert_directory;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        flexrule_cli::parse_lexicon_path(&args).unwrap_or_else(|e| flexrule_cli::fatal(&e));
    let (directory, args) = flexrule_cli::take_option(&args, "--directory", "-d")
        .unwrap_or_else(|e| flexrule_cli::fatal(&e));

    if flexrule_cli::wants_help(&args) {
        println!("flexrule-convert: Convert text files into inflection-aware rules.");
        println!();
        println!("Usage: flexrule-convert -d DIR [-l LEXICON] [OPTIONS]");
        println!();
        println!("Converts every *.txt file in DIR, writing DIR/NAME.rules.");
        println!();
        println!("Options:");
        println!("  -d, --directory DIR    Directory with input files");
        println!("  -l, --lexicon PATH     Lexicon file (.tsv or .json)");
        println!("  --no-ocr               Do not widen OCR-confusable letters");
        println!("  --escape-punct         Escape trailing punctuation in patterns");
        println!("  --debug                Log every source line and its rule (hides progress)");
        println!("  -h, --help             Print this help");
        return;
    }

    let debug = flexrule_cli::has_flag(&args, "--debug");
    flexrule_cli::init_logging(debug);

    let Some(directory) = directory else {
        flexrule_cli::fatal("missing --directory (see --help)");
    };

    let lexicon = flexrule_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| flexrule_cli::fatal(&e));
    let options = flexrule_cli::parse_rule_options(&args);
    let builder = flexrule_regex::RuleBuilder::with_options(lexicon, options);

    // Debug logging shares stderr with the progress bar
    let show_progress = !debug;
    let report = convert_directory(Path::new(&directory), &builder, show_progress)
        .unwrap_or_else(|e| flexrule_cli::fatal(&e.to_string()));

    for output in &report.written {
        println!("{}", output.display());
    }
    if !report.is_success() {
        for (input, err) in &report.failed {
            eprintln!("error: {}: {err}", input.display());
        }
        std::process::exit(1);
    }
}

// flexrule-word: Print the inflection pattern of words.
//
// Prints `word<TAB>pattern` for each word given on the command line, or for
// each line of stdin when no words are given.
//
// Usage:
//   flexrule-word [-l LEXICON] [OPTIONS] [WORD...]
//
// Options:
//   -l, --lexicon PATH     Lexicon file (.tsv or .json)
//   --no-ocr               Do not widen OCR-confusable letters
//   --escape-punct         Escape trailing punctuation in patterns
//   --forms                Also print the surface forms of each word
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use flexrule_lexicon::Lexicon;
use flexrule_regex::RuleBuilder;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        flexrule_cli::parse_lexicon_path(&args).unwrap_or_else(|e| flexrule_cli::fatal(&e));

    if flexrule_cli::wants_help(&args) {
        println!("flexrule-word: Print inflection patterns of words.");
        println!();
        println!("Usage: flexrule-word [-l LEXICON] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, prints a pattern for each.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH     Lexicon file (.tsv or .json)");
        println!("  --no-ocr               Do not widen OCR-confusable letters");
        println!("  --escape-punct         Escape trailing punctuation in patterns");
        println!("  --forms                Also print the surface forms of each word");
        println!("  -h, --help             Print this help");
        return;
    }

    flexrule_cli::init_logging(false);

    let show_forms = flexrule_cli::has_flag(&args, "--forms");
    let words: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .collect();

    let lexicon = flexrule_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| flexrule_cli::fatal(&e));
    let builder = RuleBuilder::with_options(lexicon, flexrule_cli::parse_rule_options(&args));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            print_word(&mut out, &builder, word, show_forms);
        }
    } else {
        for word in &words {
            print_word(&mut out, &builder, word, show_forms);
        }
    }
}

fn print_word(out: &mut impl Write, builder: &RuleBuilder<Lexicon>, word: &str, forms: bool) {
    let _ = writeln!(out, "{word}\t{}", builder.word(word));
    if forms {
        let _ = writeln!(out, "  forms: {}", builder.forms(word).join(", "));
    }
}

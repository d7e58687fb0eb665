// Per-sentence driver

use flexrule_core::analysis::Analyzer;

use crate::options::RuleOptions;
use crate::synth::word_regex;

/// Split `sentence` on spaces and build one pattern per token, in order.
///
/// Empty and whitespace-only tokens (from runs of spaces or stray tabs)
/// are dropped. Tokens are not deduplicated.
pub fn sentence_regex<A: Analyzer + ?Sized>(
    sentence: &str,
    analyzer: &A,
    options: &RuleOptions,
) -> Vec<String> {
    sentence
        .split(' ')
        .filter(|token| !token.trim().is_empty())
        .map(|token| word_regex(token, analyzer, options))
        .collect()
}

/// Build the rule for one line: the sentence patterns joined by single spaces.
pub fn line_rule<A: Analyzer + ?Sized>(line: &str, analyzer: &A, options: &RuleOptions) -> String {
    sentence_regex(line, analyzer, options).join(" ")
}

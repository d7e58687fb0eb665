// Per-word pattern synthesis

use flexrule_core::analysis::Analyzer;
use flexrule_core::character::{char_len, has_letter, split_trailing_punctuation};

use crate::affix::factorize;
use crate::options::{ELLIPSIS, MIN_WORD_CHARS, RuleOptions, WILDCARD};
use crate::wordforms::word_forms;

/// Build a pattern matching every inflection of `token`.
///
/// Tokens are handled in this order:
/// 1. shorter than [`MIN_WORD_CHARS`] characters (including the empty
///    token): returned unchanged
/// 2. exactly [`ELLIPSIS`]: returns [`WILDCARD`]
/// 3. no alphabetic character: returned unchanged
/// 4. otherwise a trailing punctuation character is detached, the rest is
///    expanded into its surface forms and factored into
///    `prefix(suffix|...)` (with `?` when the bare prefix is a form), and
///    the punctuation is appended again per [`RuleOptions::punctuation`]
///
/// When [`RuleOptions::ocr`] is set the assembled pattern is passed through
/// the confusable table.
pub fn word_regex<A: Analyzer + ?Sized>(
    token: &str,
    analyzer: &A,
    options: &RuleOptions,
) -> String {
    if char_len(token) < MIN_WORD_CHARS {
        return token.to_string();
    }
    if token == ELLIPSIS {
        return WILDCARD.to_string();
    }
    if !has_letter(token) {
        return token.to_string();
    }

    let (word, trailing) = split_trailing_punctuation(token);

    let forms = word_forms(word, analyzer);
    let factors = factorize(&forms);

    let mut pattern = factors.prefix.clone();
    pattern.push_str(&factors.suffix_group().to_pattern());
    if let Some(punct) = trailing {
        pattern.push_str(&options.punctuation.render(punct));
    }

    if options.ocr {
        options.confusables.rewrite(&pattern)
    } else {
        pattern
    }
}

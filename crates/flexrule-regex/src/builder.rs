// RuleBuilder: an analyzer and options bundled for repeated use

use flexrule_core::analysis::Analyzer;

use crate::options::RuleOptions;
use crate::sentence::{line_rule, sentence_regex};
use crate::synth::word_regex;
use crate::wordforms::word_forms;

/// Owns the analyzer and options used to build rules.
///
/// The analyzer is passed in explicitly; there is no process-wide default
/// instance. A builder over a `Sync` analyzer can be shared across threads.
pub struct RuleBuilder<A> {
    analyzer: A,
    options: RuleOptions,
}

impl<A: Analyzer> RuleBuilder<A> {
    /// Create a builder with default options.
    pub fn new(analyzer: A) -> Self {
        Self::with_options(analyzer, RuleOptions::default())
    }

    /// Create a builder with the given options.
    pub fn with_options(analyzer: A, options: RuleOptions) -> Self {
        Self { analyzer, options }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Surface forms of a word. See [`word_forms`].
    pub fn forms(&self, word: &str) -> Vec<String> {
        word_forms(word, &self.analyzer)
    }

    /// Pattern for one token. See [`word_regex`].
    pub fn word(&self, token: &str) -> String {
        word_regex(token, &self.analyzer, &self.options)
    }

    /// Patterns for each token of a sentence. See [`sentence_regex`].
    pub fn sentence(&self, sentence: &str) -> Vec<String> {
        sentence_regex(sentence, &self.analyzer, &self.options)
    }

    /// Rule for one line of text. See [`line_rule`].
    pub fn line(&self, line: &str) -> String {
        line_rule(line, &self.analyzer, &self.options)
    }
}

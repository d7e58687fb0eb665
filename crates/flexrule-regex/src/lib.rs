//! Regular-expression rules matching every case inflection of a word.
//!
//! Each word of a sentence is expanded into its inflected surface forms by
//! an [`Analyzer`](flexrule_core::analysis::Analyzer), the forms are
//! factored into a common prefix and a set of suffixes, and the result is
//! assembled into a single pattern such as `кот(а|у|е|ом)?`. Letters that
//! OCR engines commonly misread are widened into alternations.
//!
//! # Architecture
//!
//! - [`wordforms`] -- surface form generation with graceful fallback
//! - [`affix`] -- common prefix / suffix factorization and optionality
//! - [`ocr`] -- confusable-character rewriting
//! - [`options`] -- rule generation options
//! - [`synth`] -- per-word pattern synthesis
//! - [`sentence`] -- per-sentence driver
//! - [`builder`] -- [`RuleBuilder`], owning an analyzer and options

pub mod affix;
pub mod builder;
pub mod ocr;
pub mod options;
pub mod sentence;
pub mod synth;
pub mod wordforms;

pub use builder::RuleBuilder;
pub use options::{PunctuationMode, RuleOptions};

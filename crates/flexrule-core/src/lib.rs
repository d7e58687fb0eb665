//! Shared types for flexrule.
//!
//! - [`inflection`] -- the fixed set of grammatical cases a word is inflected into
//! - [`analysis`] -- the morphological analyzer capability and its error type
//! - [`case`] -- letter-case detection and transfer between word forms
//! - [`character`] -- character classification used by the rule synthesizer
//! - [`dedup`] -- order-preserving uniqueness filter

pub mod analysis;
pub mod case;
pub mod character;
pub mod dedup;
pub mod inflection;

/// Maximum number of characters in a word accepted by analyzers.
pub const MAX_WORD_CHARS: usize = 255;

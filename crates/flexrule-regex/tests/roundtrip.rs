//! End-to-end tests: patterns built from the sample lexicon are compiled
//! with the `regex` crate and matched against the forms they came from.
//!
//! Run: cargo test -p flexrule-regex --test roundtrip

use flexrule_core::analysis::{Analyzer, Parse};
use flexrule_core::inflection::GrammaticalCase;
use flexrule_lexicon::Lexicon;
use flexrule_regex::affix::factorize;
use flexrule_regex::{PunctuationMode, RuleBuilder, RuleOptions};
use regex::Regex;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../test-data/ru-sample.tsv");

fn sample_lexicon() -> Lexicon {
    Lexicon::load(SAMPLE).unwrap_or_else(|e| panic!("failed to load {SAMPLE}: {e}"))
}

/// Builder over the sample lexicon with OCR rewriting off.
fn plain_builder() -> RuleBuilder<Lexicon> {
    RuleBuilder::with_options(sample_lexicon(), RuleOptions::default().with_ocr(false))
}

fn anchored(fragment: &str) -> Regex {
    Regex::new(&format!("^(?:{fragment})$"))
        .unwrap_or_else(|e| panic!("fragment {fragment:?} does not compile: {e}"))
}

/// Words of the sample lexicon long enough to be expanded.
fn sample_words() -> Vec<String> {
    let text = std::fs::read_to_string(SAMPLE).unwrap();
    text.lines()
        .filter(|l| !l.starts_with('#') && !l.starts_with("nomn"))
        .flat_map(|l| l.split('\t').map(str::to_string).collect::<Vec<_>>())
        .filter(|w| w != "-" && w.chars().count() >= 3)
        .collect()
}

// ---------------------------------------------------------------------------
// Round-trip properties
// ---------------------------------------------------------------------------

#[test]
fn pattern_matches_all_of_its_forms() {
    let builder = plain_builder();
    for word in sample_words() {
        let forms = builder.forms(&word);
        let re = anchored(&builder.word(&word));
        for form in &forms {
            assert!(re.is_match(form), "{word}: pattern {re} misses {form}");
        }
    }
}

#[test]
fn ocr_pattern_matches_all_forms_and_misreads() {
    let builder = RuleBuilder::new(sample_lexicon());
    for word in sample_words() {
        let re = anchored(&builder.word(&word));
        for form in builder.forms(&word) {
            assert!(re.is_match(&form), "{word}: pattern {re} misses {form}");
            let misread = form.replace('о', "0").replace('ё', "е");
            assert!(
                re.is_match(&misread),
                "{word}: pattern {re} misses {misread}"
            );
        }
    }
}

#[test]
fn bare_prefix_matches_only_when_it_is_a_form() {
    let builder = plain_builder();
    for word in sample_words() {
        let forms = builder.forms(&word);
        let factors = factorize(&forms);
        let re = anchored(&builder.word(&word));
        let prefix_is_form = factors.suffixes.iter().any(String::is_empty);
        assert_eq!(
            re.is_match(&factors.prefix),
            prefix_is_form,
            "{word}: pattern {re} vs bare prefix {:?}",
            factors.prefix
        );
    }
}

#[test]
fn pattern_rejects_other_words() {
    let builder = plain_builder();
    let re = anchored(&builder.word("кот"));
    for other in ["котик", "кит", "ко", "коты", "котам"] {
        assert!(!re.is_match(other), "pattern {re} should not match {other}");
    }
}

// ---------------------------------------------------------------------------
// Concrete patterns
// ---------------------------------------------------------------------------

#[test]
fn cat_example() {
    let builder = plain_builder();
    assert_eq!(builder.word("кот"), "кот(а|у|е|ом)?");
    assert_eq!(builder.word("котом"), "кот(а|у|е|ом)?");
}

#[test]
fn stem_alternation_gives_required_group() {
    let builder = plain_builder();
    assert_eq!(builder.word("день"), "д(ня|ню|не|ень|нём)");
}

#[test]
fn empty_common_prefix() {
    let builder = plain_builder();
    assert_eq!(builder.word("ежа"), "(ёж|ежа|ежу|еже|ежом)");
    assert_eq!(builder.word("ежа"), builder.word("ежом"));
}

#[test]
fn capitalized_word_keeps_capitalization() {
    let builder = plain_builder();
    assert_eq!(builder.word("Москва"), "Москв(а|ы|е|у|ой)");
    assert_eq!(builder.word("Москва,"), "Москв(а|ы|е|у|ой),");
}

#[test]
fn indeclinable_words() {
    let builder = RuleBuilder::new(sample_lexicon());
    assert_eq!(builder.word("кофе"), "к(о|0)фе");
    assert_eq!(builder.word("пальто"), "пальт(о|0)");
}

#[test]
fn sentence_example() {
    let builder = RuleBuilder::new(sample_lexicon());
    assert_eq!(
        builder.sentence("кот сидит ..."),
        vec!["к(о|0)т(а|у|е|(о|0)м)?", "сидит", ".*"]
    );
    assert_eq!(
        builder.line("кот сидит ..."),
        "к(о|0)т(а|у|е|(о|0)м)? сидит .*"
    );
}

#[test]
fn trailing_period_literal_and_escaped() {
    let lexicon = sample_lexicon();

    let literal = RuleBuilder::with_options(&lexicon, RuleOptions::default().with_ocr(false));
    let pattern = literal.word("дом.");
    assert_eq!(pattern, "дом(а|у|е|ом)?.");
    // Unescaped, the period matches any character
    assert!(anchored(&pattern).is_match("домаX"));

    let escaped = RuleBuilder::with_options(
        &lexicon,
        RuleOptions::default()
            .with_ocr(false)
            .with_punctuation(PunctuationMode::Escaped),
    );
    let re = anchored(&escaped.word("дом."));
    assert!(re.is_match("дома."));
    assert!(!re.is_match("домаX"));
}

#[test]
fn forms_come_from_the_top_parse() {
    let lexicon = sample_lexicon();
    assert_eq!(lexicon.len(), 21);
    let builder = RuleBuilder::new(&lexicon);
    assert_eq!(
        builder.forms("окно"),
        vec!["окно", "окна", "окну", "окне", "окном"]
    );
    assert_eq!(builder.forms("пальто"), vec!["пальто"]);
}

#[test]
fn every_case_of_a_paradigm_is_covered() {
    let lexicon = sample_lexicon();
    let builder = RuleBuilder::with_options(&lexicon, RuleOptions::default().with_ocr(false));
    let re = anchored(&builder.word("книга"));
    let parses = lexicon.analyze("книга").unwrap();
    for case in GrammaticalCase::ALL {
        let form = parses[0].inflect(case).unwrap();
        assert!(re.is_match(&form), "{case}: pattern {re} misses {form}");
    }
}

// A single lexeme: its surface form in each grammatical case

use flexrule_core::inflection::{CASE_COUNT, GrammaticalCase};

/// The inflection table of one lexeme.
///
/// Each case slot holds the lowercase surface form, or `None` when the
/// lexeme has no form in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paradigm {
    forms: [Option<String>; CASE_COUNT],
}

impl Paradigm {
    /// Create a paradigm with no forms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a paradigm from `(case, form)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (GrammaticalCase, S)>,
        S: Into<String>,
    {
        let mut paradigm = Self::new();
        for (case, form) in pairs {
            paradigm.set(case, form);
        }
        paradigm
    }

    /// Set the form for a case. The form is stored lowercased.
    pub fn set(&mut self, case: GrammaticalCase, form: impl Into<String>) {
        let form: String = form.into();
        self.forms[case.index()] = Some(form.to_lowercase());
    }

    /// Get the form for a case.
    pub fn get(&self, case: GrammaticalCase) -> Option<&str> {
        self.forms[case.index()].as_deref()
    }

    /// Iterate over the present forms in case order.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().filter_map(|f| f.as_deref())
    }

    /// Check whether the paradigm has no forms at all.
    pub fn is_empty(&self) -> bool {
        self.forms.iter().all(Option::is_none)
    }
}

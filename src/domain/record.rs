// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One validated (text, label) pair derived from one data line
// of the input CSV. Built once by the parser and never mutated.

use serde::{Deserialize, Serialize};

/// A labelled email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Message body with one layer of surrounding quotes removed.
    /// May be empty.
    pub text: String,

    /// `true` when the message is spam.
    pub is_spam: bool,
}

impl Record {
    pub fn new(text: impl Into<String>, is_spam: bool) -> Self {
        Self {
            text: text.into(),
            is_spam,
        }
    }

    /// Class index used by the model: 1 = spam, 0 = not spam.
    pub fn class_index(&self) -> i64 {
        i64::from(self.is_spam)
    }
}

/// Counts of each class in a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub spam: usize,
    pub not_spam: usize,
}

impl ClassCounts {
    pub fn of(records: &[Record]) -> Self {
        let spam = records.iter().filter(|r| r.is_spam).count();
        Self {
            spam,
            not_spam: records.len() - spam,
        }
    }

    pub fn total(&self) -> usize {
        self.spam + self.not_spam
    }
}

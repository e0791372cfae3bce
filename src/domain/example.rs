// ============================================================
// Layer 3 — Example Domain Type
// ============================================================
// Represents one labeled text record — the atom of every
// dataset in this crate. This is a plain data struct with
// no behaviour: a sentence and the class it belongs to.
//
// Examples are immutable after creation. Whichever collection
// holds one (the full dataset or a train/dev half) owns it;
// there is no sharing or mutation once it exists.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One labeled sentence.
///
/// The text is kept raw — cleaning/tokenisation happens later
/// in the data layer, not at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// The raw sentence text
    pub text: String,

    /// The class label, e.g. "positive" or "four".
    /// For file-per-label corpora this is the source filename.
    pub label: String,
}

impl Example {
    /// Create a new Example.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text:  text.into(),
            label: label.into(),
        }
    }
}

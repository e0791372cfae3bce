// ============================================================
// Layer 3 — Field Schema
// ============================================================
// Metadata describing how a dataset's text and label
// attributes should later be encoded by a downstream ML
// pipeline (vocabulary building, numericalisation, ...).
//
// This crate never looks inside the descriptors — it only
// guarantees that every Example in one Dataset travels with
// the same schema, and that a train/dev split preserves it.

use serde::{Deserialize, Serialize};

/// Opaque encoder descriptors for the two attributes of an
/// Example. Carried by every Dataset and passed through to
/// both halves of a split unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Descriptor for the sentence text attribute
    pub text_field: String,

    /// Descriptor for the class label attribute
    pub label_field: String,
}

impl FieldSchema {
    /// Create a new FieldSchema from two descriptor names
    pub fn new(text_field: impl Into<String>, label_field: impl Into<String>) -> Self {
        Self {
            text_field:  text_field.into(),
            label_field: label_field.into(),
        }
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::new("text", "label")
    }
}

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (preparing a train/dev split, or bucketing a
// commentary file by label).
//
// Rules for this layer:
//   - No parsing, regex, or shuffling logic here
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Fetch corpus → load dataset → train/dev split
pub mod prepare_use_case;

// Outcome file → per-label bucket files
pub mod bucket_use_case;

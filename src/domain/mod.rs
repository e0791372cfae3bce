// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO regex or randomness
//   - Only plain Rust structs and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no disk or network needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One labeled text record
pub mod example;

// Opaque field descriptors carried by every dataset
pub mod fields;

// Core abstractions (traits) that other layers implement
pub mod traits;

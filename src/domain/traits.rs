// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour.
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - HttpFetcher implements ArchiveFetcher in production
//   - A counting stub implements it in the idempotence tests
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::example::Example;

// ─── ExampleSource ────────────────────────────────────────────────────────────
/// Any component that can produce a list of labeled examples.
///
/// Implementations:
///   - Dataset's polarity reader → two fixed-name label files
///   - Dataset's bucketed reader → one file per label name
pub trait ExampleSource {
    /// Load all available examples from this source.
    fn load_all(&self) -> Result<Vec<Example>>;
}

// ─── ArchiveFetcher ───────────────────────────────────────────────────────────
/// Any component that can fetch a remote archive to a local path.
///
/// Kept behind a trait so the corpus provider's idempotence
/// ("fetch at most once") can be verified with a stub that
/// counts calls, without touching the network.
pub trait ArchiveFetcher {
    /// Download `url` and save the body to `dest`.
    /// A transport or HTTP failure is fatal — no retry,
    /// no partial-file cleanup.
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

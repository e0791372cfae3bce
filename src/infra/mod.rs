// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting implementations that don't belong in any
// business layer:
//
//   http.rs — Blocking HTTP downloads
//             Implements the ArchiveFetcher trait from
//             Layer 3 with a plain ureq GET-and-save.
//             The data layer never sees HTTP types; tests
//             swap in a counting stub instead.
//
// Reference: Rust Book §7 (Modules)

/// Blocking HTTP archive fetcher
pub mod http;

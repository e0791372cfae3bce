// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a remote corpus archive
// all the way to in-memory train/dev datasets and on-disk
// label-bucket files.
//
// The pipeline flows in this order:
//
//   remote .tar.gz archive
//       │
//       ▼
//   CorpusArchive     → downloads (if missing) and extracts
//       │
//       ▼
//   Dataset readers   → parse label files into Examples
//       │
//       ▼
//   clean_str         → normalises sentence text into tokens
//       │
//       ▼
//   split_examples    → shuffles and cuts into train/dev
//
// A separate preprocessing path, bucketize, re-partitions a
// tab-separated outcome file into one file per label for the
// bucketed Dataset reader to consume later.
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Downloads and extracts the corpus archive
pub mod archive;

/// Datasets: schema + examples, file readers, train/dev splits
pub mod dataset;

/// Shuffles and splits examples into train/dev sets
pub mod splitter;

/// Cleans and tokenises raw sentence text
pub mod normalizer;

/// Re-partitions a tab-separated outcome file into label buckets
pub mod bucketizer;

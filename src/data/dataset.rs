// ============================================================
// Layer 4 — Datasets and Label-File Readers
// ============================================================
// A Dataset is an ordered list of Examples plus the field
// schema describing how a downstream pipeline should encode
// them. Two readers feed it:
//
//   PolarityFiles — the two-class movie-review corpus, read
//                   from two fixed-name files where every line
//                   of one file is negative and every line of
//                   the other is positive.
//
//   LabelFiles    — file-per-label corpora (e.g. the bucket
//                   files written by the bucketizer), capped
//                   at max_examples lines per label.
//
// Construction is split into explicit factories instead of one
// constructor with optional arguments: from_examples wraps a
// pre-built list with no I/O, the reader-based factories parse
// from disk. Exactly one path runs; a split re-wraps its two
// halves through from_examples and never re-parses.
//
// Raw corpus files are not guaranteed to be valid UTF-8, so
// the readers decode lossily — malformed bytes are replaced,
// never fatal. A missing label file, on the other hand, is
// always fatal.
//
// Reference: Rust Book §8 (Collections), §9 (Error Handling)

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use crate::data::splitter::split_examples;
use crate::domain::example::Example;
use crate::domain::fields::FieldSchema;
use crate::domain::traits::ExampleSource;

/// The two fixed file names of the polarity corpus
pub const NEGATIVE_FILE: &str = "rt-polarity.neg";
pub const POSITIVE_FILE: &str = "rt-polarity.pos";

/// Decode bytes as UTF-8, dropping invalid sequences outright.
/// Walks the buffer in valid chunks: everything up to an error
/// is kept, the offending bytes are skipped, and decoding
/// resumes right after them.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out  = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // The prefix was just checked, so the lossy pass
                // borrows it unchanged
                out.push_str(&String::from_utf8_lossy(valid));
                // error_len() is None only for a truncated
                // sequence at the very end of the buffer
                let skip = err.error_len().unwrap_or(after.len());
                rest = &after[skip..];
            }
        }
    }
}

/// Read one label file leniently: malformed byte sequences are
/// dropped, never fatal. Only a missing/unreadable file errors.
fn read_label_file(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read label file '{}'", path.display()))?;
    let text = decode_ignoring_invalid(&bytes);
    Ok(text.lines().map(str::to_string).collect())
}

// ─── PolarityFiles ────────────────────────────────────────────────────────────
/// Reader for the two-class polarity corpus.
pub struct PolarityFiles {
    /// Directory containing rt-polarity.neg and rt-polarity.pos
    dir: PathBuf,
}

impl PolarityFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExampleSource for PolarityFiles {
    fn load_all(&self) -> Result<Vec<Example>> {
        let mut examples = Vec::new();
        for (filename, label) in [(NEGATIVE_FILE, "negative"), (POSITIVE_FILE, "positive")] {
            let lines = read_label_file(&self.dir.join(filename))?;
            tracing::debug!("Read {} '{}' lines from {}", lines.len(), label, filename);
            examples.extend(lines.into_iter().map(|line| Example::new(line, label)));
        }
        Ok(examples)
    }
}

// ─── LabelFiles ───────────────────────────────────────────────────────────────
/// Reader for file-per-label corpora: each entry in `labels`
/// names both a file under `dir` and the label its lines get.
pub struct LabelFiles {
    dir:          PathBuf,
    labels:       Vec<String>,

    /// Per-label line cap applied at read time
    max_examples: usize,
}

impl LabelFiles {
    pub fn new(dir: impl Into<PathBuf>, labels: &[&str], max_examples: usize) -> Self {
        Self {
            dir:          dir.into(),
            labels:       labels.iter().map(|l| l.to_string()).collect(),
            max_examples,
        }
    }
}

impl ExampleSource for LabelFiles {
    fn load_all(&self) -> Result<Vec<Example>> {
        let mut examples = Vec::new();
        for label in &self.labels {
            let lines = read_label_file(&self.dir.join(label))?;
            let taken = lines.len().min(self.max_examples);
            if taken < lines.len() {
                tracing::debug!("Capping '{}' at {} of {} lines", label, taken, lines.len());
            }
            examples.extend(
                lines
                    .into_iter()
                    .take(self.max_examples)
                    .map(|line| Example::new(line, label.clone())),
            );
        }
        Ok(examples)
    }
}

// ─── Dataset ──────────────────────────────────────────────────────────────────
/// An ordered collection of Examples sharing one field schema.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema:   FieldSchema,
    examples: Vec<Example>,
}

impl Dataset {
    /// Wrap a pre-built example list. No I/O, no parsing.
    pub fn from_examples(schema: FieldSchema, examples: Vec<Example>) -> Self {
        Self { schema, examples }
    }

    /// Build a dataset by draining any example source.
    pub fn from_source(schema: FieldSchema, source: &dyn ExampleSource) -> Result<Self> {
        let examples = source.load_all()?;
        Ok(Self::from_examples(schema, examples))
    }

    /// The two-class polarity corpus under `dir`.
    pub fn polarity(schema: FieldSchema, dir: &Path) -> Result<Self> {
        Self::from_source(schema, &PolarityFiles::new(dir))
    }

    /// A file-per-label corpus under `dir`, capped per label.
    pub fn bucketed(
        schema: FieldSchema,
        dir: &Path,
        labels: &[&str],
        max_examples: usize,
    ) -> Result<Self> {
        Self::from_source(schema, &LabelFiles::new(dir, labels, max_examples))
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// How many examples carry each label. BTreeMap so the
    /// summary logs in a stable order.
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for ex in &self.examples {
            *counts.entry(ex.label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Split into (train, dev) datasets sharing this schema.
    ///
    /// Consumes self; both halves are rebuilt via from_examples
    /// so nothing is re-parsed from disk.
    pub fn splits(self, dev_ratio: f64, shuffle: bool, rng: &mut StdRng) -> (Dataset, Dataset) {
        let (train, dev) = split_examples(self.examples, dev_ratio, shuffle, rng);
        (
            Dataset::from_examples(self.schema.clone(), train),
            Dataset::from_examples(self.schema, dev),
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    fn schema() -> FieldSchema {
        FieldSchema::default()
    }

    #[test]
    fn test_polarity_labels_both_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(NEGATIVE_FILE), "bad movie\nawful\n").unwrap();
        fs::write(dir.path().join(POSITIVE_FILE), "great movie\n").unwrap();

        let ds = Dataset::polarity(schema(), dir.path()).unwrap();

        assert_eq!(ds.len(), 3);
        let counts = ds.label_counts();
        assert_eq!(counts["negative"], 2);
        assert_eq!(counts["positive"], 1);
    }

    #[test]
    fn test_polarity_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(NEGATIVE_FILE), "bad\n").unwrap();
        // rt-polarity.pos deliberately absent

        assert!(Dataset::polarity(schema(), dir.path()).is_err());
    }

    #[test]
    fn test_polarity_drops_invalid_utf8() {
        let dir = tempdir().unwrap();
        // 0xFF is not valid UTF-8 anywhere in a sequence
        fs::write(dir.path().join(NEGATIVE_FILE), b"caf\xFF scene\n").unwrap();
        fs::write(dir.path().join(POSITIVE_FILE), "fine\n").unwrap();

        let ds = Dataset::polarity(schema(), dir.path()).unwrap();

        assert_eq!(ds.len(), 2);
        // The malformed byte is dropped outright — no
        // substitution character, surrounding text intact
        assert_eq!(ds.examples()[0].text, "caf scene");
        assert!(!ds.examples()[0].text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_decode_ignoring_invalid_edge_cases() {
        // Invalid bytes between valid chunks disappear
        assert_eq!(decode_ignoring_invalid(b"a\xFF\xFEb"), "ab");
        // A truncated multi-byte sequence at the end is dropped
        assert_eq!(decode_ignoring_invalid(b"ok\xE2\x82"), "ok");
        // Valid multi-byte text passes through untouched
        assert_eq!(decode_ignoring_invalid("naïve café".as_bytes()), "naïve café");
        assert_eq!(decode_ignoring_invalid(b""), "");
    }

    #[test]
    fn test_bucketed_caps_per_label() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("four"), "a\nb\nc\nd\n").unwrap();
        fs::write(dir.path().join("out"), "x\n").unwrap();

        let ds = Dataset::bucketed(schema(), dir.path(), &["four", "out"], 2).unwrap();

        let counts = ds.label_counts();
        assert_eq!(counts["four"], 2);
        assert_eq!(counts["out"], 1);
    }

    #[test]
    fn test_bucketed_missing_label_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("four"), "a\n").unwrap();

        assert!(Dataset::bucketed(schema(), dir.path(), &["four", "six"], 10).is_err());
    }

    #[test]
    fn test_splits_share_schema_and_partition() {
        let sch = FieldSchema::new("sentence", "class");
        let examples: Vec<Example> = (0..10)
            .map(|i| Example::new(format!("text {i}"), "label"))
            .collect();
        let ds = Dataset::from_examples(sch.clone(), examples);

        let mut rng = StdRng::seed_from_u64(7);
        let (train, dev) = ds.splits(0.2, true, &mut rng);

        assert_eq!(train.schema(), &sch);
        assert_eq!(dev.schema(), &sch);
        assert_eq!(train.len(), 8);
        assert_eq!(dev.len(), 2);
    }
}

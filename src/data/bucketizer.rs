// ============================================================
// Layer 4 — Label Bucketizer
// ============================================================
// Re-partitions a tab-separated outcome file into one file
// per label, ready for the bucketed Dataset reader.
//
// Input format, one record per line:
//
//   <outcome-literal>\t<text>
//
// The outcome literal is resolved to a label through an
// explicit LabelMap passed in by the caller — not a table
// buried inside the function — so the mapping can be
// validated and tested on its own.
//
// Each label's texts are shuffled and written newline-joined
// (no trailing newline) to output_dir/<label>. Existing files
// are overwritten; writes are not atomic. An unmapped outcome
// or a line with no tab is fatal: the run fails fast and does
// not clean up buckets already written.
//
// No per-label cap is applied here — capping happens at read
// time in the bucketed Dataset form.
//
// Reference: Rust Book §8 (HashMaps), §9 (Error Handling)

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

/// Default directory the bucket files are written under
pub const DEFAULT_OUTPUT_DIR: &str = "commentary_data";

// ─── LabelMap ─────────────────────────────────────────────────────────────────
/// Mapping from outcome literals (as they appear in column one
/// of the input file) to label names (which double as output
/// filenames).
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    mapping: HashMap<String, String>,
}

impl LabelMap {
    /// Build a map from (outcome, label) pairs
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            mapping: pairs
                .iter()
                .map(|(outcome, label)| (outcome.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// The fixed ball-by-ball cricket commentary outcomes
    pub fn cricket_outcomes() -> Self {
        Self::new(&[
            ("1 leg bye,", "leg_bye"),
            ("1 run,", "single"),
            ("1 wide,", "wide"),
            ("2 runs,", "double"),
            ("3 runs,", "triple"),
            ("FOUR,", "four"),
            ("OUT,", "out"),
            ("SIX,", "six"),
            ("no run,", "none"),
        ])
    }

    /// Resolve an outcome literal to its label name
    pub fn label_for(&self, outcome: &str) -> Option<&str> {
        self.mapping.get(outcome).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

// ─── bucketize ────────────────────────────────────────────────────────────────
/// Read `input_file`, group its texts by resolved label, and
/// write one shuffled bucket file per label under `output_dir`.
pub fn bucketize(
    input_file: &Path,
    output_dir: &Path,
    labels: &LabelMap,
    rng: &mut StdRng,
) -> Result<()> {
    let raw = fs::read_to_string(input_file)
        .with_context(|| format!("Cannot read input file '{}'", input_file.display()))?;

    // BTreeMap keeps the write loop in stable label order
    let mut buckets: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (lineno, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Split on the first tab only — the text may contain tabs
        let Some((outcome, text)) = line.split_once('\t') else {
            bail!(
                "Line {} of '{}' has no tab separator",
                lineno + 1,
                input_file.display()
            );
        };
        let Some(label) = labels.label_for(outcome) else {
            bail!(
                "Unknown outcome '{}' on line {} of '{}'",
                outcome,
                lineno + 1,
                input_file.display()
            );
        };
        buckets.entry(label).or_default().push(text);
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Cannot create output dir '{}'", output_dir.display()))?;

    for (label, mut samples) in buckets {
        samples.shuffle(rng);
        let path = output_dir.join(label);
        tracing::info!("Writing {} samples to '{}'", samples.len(), path.display());
        fs::write(&path, samples.join("\n"))
            .with_context(|| format!("Cannot write bucket file '{}'", path.display()))?;
    }

    Ok(())
}

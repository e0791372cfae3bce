// ============================================================
// Layer 2 — BucketUseCase
// ============================================================
// Orchestrates the commentary preprocessing path:
//
//   Step 1: Build the outcome→label map     (Layer 4)
//   Step 2: Seed the shuffle RNG            (here)
//   Step 3: Bucketize the outcome file      (Layer 4)
//
// The per-label cap is NOT applied here — bucket files hold
// everything, and the bucketed Dataset reader caps at read
// time with its max_examples argument.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::bucketizer::{bucketize, LabelMap, DEFAULT_OUTPUT_DIR};

// ─── Bucketing Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Tab-separated "<outcome>\t<text>" input file
    pub input: PathBuf,

    /// Directory the per-label bucket files are written under
    pub output_dir: PathBuf,

    /// Fixed RNG seed; None draws one from the OS
    pub seed: Option<u64>,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            input:      PathBuf::from("commentary.tsv"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed:       None,
        }
    }
}

// ─── BucketUseCase ────────────────────────────────────────────────────────────
pub struct BucketUseCase {
    config: BucketConfig,
}

impl BucketUseCase {
    pub fn new(config: BucketConfig) -> Self {
        Self { config }
    }

    /// Run the bucketizer with the cricket outcome map.
    pub fn execute(&self) -> Result<()> {
        let cfg    = &self.config;
        let labels = LabelMap::cricket_outcomes();

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        tracing::info!(
            "Bucketing '{}' into '{}'",
            cfg.input.display(),
            cfg.output_dir.display()
        );
        bucketize(&cfg.input, &cfg.output_dir, &labels, &mut rng)
    }
}

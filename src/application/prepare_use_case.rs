// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full dataset-preparation pipeline in order:
//
//   Step 1: Ensure the corpus is on disk   (Layer 4 + 5)
//   Step 2: Parse the polarity files       (Layer 4)
//   Step 3: Record the run settings        (here)
//   Step 4: Normalise sentence text        (Layer 4)
//   Step 5: Shuffle and split train/dev    (Layer 4)
//   Step 6: Log the split summary          (here)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::{archive::CorpusArchive, dataset::Dataset, normalizer::clean_str};
use crate::domain::example::Example;
use crate::domain::fields::FieldSchema;
use crate::infra::http::HttpFetcher;

/// Filename the run settings are recorded under, inside root
pub const CONFIG_FILENAME: &str = "prepare_config.json";

// ─── Preparation Configuration ────────────────────────────────────────────────
// Everything a preparation run needs. Serialised to JSON next
// to the corpus so a split can be traced back to the exact
// flags (ratio, seed, cleaning) that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Root directory the corpus archive is downloaded into
    /// and extracted under
    pub root: PathBuf,

    /// Proportion of examples held out for the dev set
    pub dev_ratio: f64,

    /// Whether to shuffle before cutting the split
    pub shuffle: bool,

    /// Whether to run sentences through clean_str
    pub clean: bool,

    /// Fixed RNG seed; None draws one from the OS
    pub seed: Option<u64>,

    /// Opaque encoder descriptors carried by the datasets
    pub text_field:  String,
    pub label_field: String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            root:        PathBuf::from("."),
            dev_ratio:   0.1,
            shuffle:     true,
            clean:       true,
            seed:        None,
            text_field:  "text".to_string(),
            label_field: "label".to_string(),
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the pipeline end to end.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Ensure the polarity corpus is present under the root and
    /// return the corpus directory. Used on its own by `fetch`
    /// and as step 1 of execute().
    pub fn fetch_corpus(&self) -> Result<PathBuf> {
        let corpus  = CorpusArchive::movie_review();
        let fetcher = HttpFetcher::new();
        corpus.download_or_unzip(&fetcher, &self.config.root)
    }

    /// Execute the full preparation pipeline, returning the
    /// (train, dev) datasets.
    pub fn execute(&self) -> Result<(Dataset, Dataset)> {
        let cfg = &self.config;

        // ── Step 1: Ensure the corpus is on disk ─────────────────────────────
        let corpus_dir = self.fetch_corpus()?;
        tracing::info!("Corpus directory: '{}'", corpus_dir.display());

        // ── Step 2: Parse the two polarity files ──────────────────────────────
        let schema  = FieldSchema::new(&cfg.text_field, &cfg.label_field);
        let dataset = Dataset::polarity(schema, &corpus_dir)?;
        tracing::info!("Loaded {} examples", dataset.len());

        // ── Step 3: Record the run settings under the root ────────────────────
        self.save_config()?;

        self.split(dataset)
    }

    /// Write this run's settings as JSON under the root, so the
    /// split stays traceable to the flags that produced it.
    pub fn save_config(&self) -> Result<PathBuf> {
        let path = self.config.root.join(CONFIG_FILENAME);
        let json = serde_json::to_string_pretty(&self.config)
            .context("Cannot serialise run settings")?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Recorded run settings at '{}'", path.display());
        Ok(path)
    }

    /// Split an already-loaded dataset, applying normalisation
    /// first when configured. Separated from execute() so tests
    /// can drive it without touching the network.
    pub fn split(&self, dataset: Dataset) -> Result<(Dataset, Dataset)> {
        let cfg = &self.config;

        // ── Step 4: Normalise sentence text ───────────────────────────────────
        let dataset = if cfg.clean {
            let schema = dataset.schema().clone();
            let cleaned: Vec<Example> = dataset
                .examples()
                .iter()
                .map(|ex| Example::new(clean_str(&ex.text), ex.label.clone()))
                .collect();
            Dataset::from_examples(schema, cleaned)
        } else {
            dataset
        };

        // ── Step 5: Shuffle and cut the train/dev split ───────────────────────
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let (train, dev) = dataset.splits(cfg.dev_ratio, cfg.shuffle, &mut rng);

        // ── Step 6: Log the split summary ─────────────────────────────────────
        tracing::info!("Split: {} train / {} dev", train.len(), dev.len());
        for (label, count) in train.label_counts() {
            tracing::info!("  train '{}': {}", label, count);
        }
        for (label, count) in dev.label_counts() {
            tracing::info!("  dev   '{}': {}", label, count);
        }

        Ok((train, dev))
    }
}

/// Convenience for downstream pipelines: fetch the corpus under
/// `root` if needed, then produce a (train, dev) split.
pub fn splits(
    text_field: &str,
    label_field: &str,
    dev_ratio: f64,
    shuffle: bool,
    root: &Path,
) -> Result<(Dataset, Dataset)> {
    let config = PrepareConfig {
        root: root.to_path_buf(),
        dev_ratio,
        shuffle,
        text_field: text_field.to_string(),
        label_field: label_field.to_string(),
        ..PrepareConfig::default()
    };
    PrepareUseCase::new(config).execute()
}

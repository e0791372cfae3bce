// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `fetch`, `split`, `bucket`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::bucket_use_case::BucketConfig;
use crate::application::prepare_use_case::PrepareConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and extract the polarity corpus if absent
    Fetch(FetchArgs),

    /// Load the polarity corpus and cut a train/dev split
    Split(SplitArgs),

    /// Re-partition a tab-separated commentary file into
    /// one bucket file per label
    Bucket(BucketArgs),
}

/// All arguments for the `fetch` command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Root directory the corpus archive is downloaded into
    /// and extracted under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl From<FetchArgs> for PrepareConfig {
    fn from(a: FetchArgs) -> Self {
        PrepareConfig {
            root: a.root,
            ..PrepareConfig::default()
        }
    }
}

/// All arguments for the `split` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Root directory the corpus archive is downloaded into
    /// and extracted under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Proportion of examples held out for the dev set
    #[arg(long, default_value_t = 0.1)]
    pub dev_ratio: f64,

    /// Keep file order instead of shuffling before the cut
    #[arg(long)]
    pub no_shuffle: bool,

    /// Skip sentence normalisation (clean_str)
    #[arg(long)]
    pub no_clean: bool,

    /// Fixed RNG seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Encoder descriptor for the text attribute
    #[arg(long, default_value = "text")]
    pub text_field: String,

    /// Encoder descriptor for the label attribute
    #[arg(long, default_value = "label")]
    pub label_field: String,
}

/// Convert CLI SplitArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<SplitArgs> for PrepareConfig {
    fn from(a: SplitArgs) -> Self {
        PrepareConfig {
            root:        a.root,
            dev_ratio:   a.dev_ratio,
            shuffle:     !a.no_shuffle,
            clean:       !a.no_clean,
            seed:        a.seed,
            text_field:  a.text_field,
            label_field: a.label_field,
        }
    }
}

/// All arguments for the `bucket` command
#[derive(Args, Debug)]
pub struct BucketArgs {
    /// Tab-separated "<outcome>\t<text>" input file
    #[arg(long)]
    pub input: PathBuf,

    /// Directory the per-label bucket files are written under
    #[arg(long, default_value = "commentary_data")]
    pub output_dir: PathBuf,

    /// Fixed RNG seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<BucketArgs> for BucketConfig {
    fn from(a: BucketArgs) -> Self {
        BucketConfig {
            input:      a.input,
            output_dir: a.output_dir,
            seed:       a.seed,
        }
    }
}

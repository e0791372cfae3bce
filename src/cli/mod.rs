// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `fetch`  — ensures the polarity corpus is on disk
//   2. `split`  — loads the corpus and cuts a train/dev split
//   3. `bucket` — re-partitions a commentary file by label
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BucketArgs, Commands, FetchArgs, SplitArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "text-data-prep",
    version = "0.1.0",
    about = "Fetch, clean, and split labeled sentence corpora for text classification."
)]
pub struct Cli {
    /// The subcommand to run (fetch, split, or bucket)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// The handlers are associated functions: the match moves the
    /// args out of self, so nothing may borrow self afterwards.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Fetch(args)  => Self::run_fetch(args),
            Commands::Split(args)  => Self::run_split(args),
            Commands::Bucket(args) => Self::run_bucket(args),
        }
    }

    /// Handles the `fetch` subcommand.
    fn run_fetch(args: FetchArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        let use_case = PrepareUseCase::new(args.into());
        let corpus_dir = use_case.fetch_corpus()?;
        println!("Corpus ready at {}", corpus_dir.display());
        Ok(())
    }

    /// Handles the `split` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_split(args: SplitArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        let use_case = PrepareUseCase::new(args.into());
        let (train, dev) = use_case.execute()?;
        println!("Split complete: {} train / {} dev", train.len(), dev.len());
        Ok(())
    }

    /// Handles the `bucket` subcommand.
    fn run_bucket(args: BucketArgs) -> Result<()> {
        use crate::application::bucket_use_case::BucketUseCase;

        let use_case = BucketUseCase::new(args.into());
        use_case.execute()?;
        println!("Bucket files written.");
        Ok(())
    }
}

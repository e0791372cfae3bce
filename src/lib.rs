// ============================================================
// text-data-prep — dataset utilities for text classification
// ============================================================
// Fetches a labeled sentence corpus, normalises raw text, and
// produces train/dev splits consumable by an ML text pipeline.
//
// The layers, outermost first:
//   cli/         — clap argument parsing, routing only
//   application/ — use cases orchestrating the pipeline
//   domain/      — plain types (Example, FieldSchema) and traits
//   data/        — corpus provider, datasets, splitter,
//                  normalizer, bucketizer
//   infra/       — blocking HTTP fetcher

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

// The surface a downstream ML pipeline consumes directly.
pub use application::prepare_use_case::splits;
pub use data::bucketizer::{bucketize, LabelMap};
pub use data::dataset::Dataset;
pub use data::normalizer::clean_str;
pub use domain::example::Example;
pub use domain::fields::FieldSchema;

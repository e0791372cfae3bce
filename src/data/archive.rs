// ============================================================
// Layer 4 — Corpus Archive Provider
// ============================================================
// Guarantees that an extracted corpus directory exists under a
// given root, fetching and unpacking a .tar.gz archive from a
// fixed URL if it is absent.
//
// The check order makes repeated calls cheap:
//   1. root/dirname exists?   → done, return it
//   2. root/filename exists?  → skip the download
//   3. otherwise              → fetch the archive first
//   then gunzip + untar into root, which creates root/dirname.
//
// The actual HTTP GET lives behind the ArchiveFetcher trait
// (Layer 5 provides the real one) so tests can count fetches.
//
// Failure modes are deliberately simple: a fetch or extraction
// error propagates as-is — no retry, no partial-file cleanup,
// and no validation of the archive layout.
//
// Reference: flate2 and tar crate documentation

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tar::Archive;

use crate::domain::traits::ArchiveFetcher;

/// The movie-review polarity corpus distributed by Cornell.
pub const MR_URL: &str =
    "https://www.cs.cornell.edu/people/pabo/movie-review-data/rt-polaritydata.tar.gz";
pub const MR_FILENAME: &str = "rt-polaritydata.tar.gz";
pub const MR_DIRNAME: &str = "rt-polaritydata";

/// A downloadable, tar-packaged corpus.
///
/// `dirname` is the top-level directory inside the archive that
/// holds the data files; extraction into `root` creates it.
pub struct CorpusArchive {
    /// URL where the .tar.gz archive can be downloaded
    pub url: String,

    /// Filename the downloaded archive is saved under
    pub filename: String,

    /// Top-level directory name inside the archive
    pub dirname: String,
}

impl CorpusArchive {
    pub fn new(
        url: impl Into<String>,
        filename: impl Into<String>,
        dirname: impl Into<String>,
    ) -> Self {
        Self {
            url:      url.into(),
            filename: filename.into(),
            dirname:  dirname.into(),
        }
    }

    /// The fixed movie-review polarity corpus instance
    pub fn movie_review() -> Self {
        Self::new(MR_URL, MR_FILENAME, MR_DIRNAME)
    }

    /// Ensure the extracted corpus directory exists under `root`
    /// and return its path.
    ///
    /// Idempotent: with an already-populated directory this does
    /// no network or extraction work at all.
    pub fn download_or_unzip(
        &self,
        fetcher: &dyn ArchiveFetcher,
        root: &Path,
    ) -> Result<PathBuf> {
        let corpus_dir = root.join(&self.dirname);
        if corpus_dir.is_dir() {
            tracing::debug!("Corpus already present at '{}'", corpus_dir.display());
            return Ok(corpus_dir);
        }

        let archive_path = root.join(&self.filename);
        if !archive_path.is_file() {
            tracing::info!("Downloading {}", self.url);
            fetcher.fetch(&self.url, &archive_path)?;
        }

        tracing::info!("Extracting '{}'", archive_path.display());
        let file = File::open(&archive_path)
            .with_context(|| format!("Cannot open archive '{}'", archive_path.display()))?;

        // A .tar.gz is a gzip stream wrapping a tar stream, so we
        // stack the two decoders. unpack() recreates the archive's
        // directory tree under root — including dirname.
        let mut tarball = Archive::new(GzDecoder::new(file));
        tarball
            .unpack(root)
            .with_context(|| format!("Cannot extract '{}'", archive_path.display()))?;

        Ok(corpus_dir)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::cell::Cell;
    use std::fs;
    use tempfile::tempdir;

    /// Stub fetcher that counts calls and "downloads" a small
    /// in-memory .tar.gz containing `dirname/inner.txt`.
    struct CountingFetcher {
        calls:   Cell<usize>,
        archive: Vec<u8>,
    }

    impl CountingFetcher {
        fn new(dirname: &str) -> Self {
            let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::fast()));
            let body = b"hello corpus";
            let mut header = tar::Header::new_gnu();
            header.set_size(body.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, format!("{dirname}/inner.txt"), &body[..])
                .unwrap();
            let archive = builder.into_inner().unwrap().finish().unwrap();
            Self {
                calls: Cell::new(0),
                archive,
            }
        }
    }

    impl ArchiveFetcher for CountingFetcher {
        fn fetch(&self, _url: &str, dest: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            fs::write(dest, &self.archive)?;
            Ok(())
        }
    }

    #[test]
    fn test_downloads_and_extracts_when_absent() {
        let root    = tempdir().unwrap();
        let corpus  = CorpusArchive::new("http://unused.test/c.tar.gz", "c.tar.gz", "corpus");
        let fetcher = CountingFetcher::new("corpus");

        let dir = corpus.download_or_unzip(&fetcher, root.path()).unwrap();

        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(dir, root.path().join("corpus"));
        let inner = fs::read_to_string(dir.join("inner.txt")).unwrap();
        assert_eq!(inner, "hello corpus");
    }

    #[test]
    fn test_second_call_fetches_nothing() {
        let root    = tempdir().unwrap();
        let corpus  = CorpusArchive::new("http://unused.test/c.tar.gz", "c.tar.gz", "corpus");
        let fetcher = CountingFetcher::new("corpus");

        corpus.download_or_unzip(&fetcher, root.path()).unwrap();
        corpus.download_or_unzip(&fetcher, root.path()).unwrap();

        // The directory existed on the second call, so the network
        // was hit at most once in total.
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn test_existing_archive_skips_download() {
        let root    = tempdir().unwrap();
        let corpus  = CorpusArchive::new("http://unused.test/c.tar.gz", "c.tar.gz", "corpus");
        let fetcher = CountingFetcher::new("corpus");

        // Pre-place the archive file; only extraction should run.
        fs::write(root.path().join("c.tar.gz"), &fetcher.archive).unwrap();
        let dir = corpus.download_or_unzip(&fetcher, root.path()).unwrap();

        assert_eq!(fetcher.calls.get(), 0);
        assert!(dir.join("inner.txt").is_file());
    }
}

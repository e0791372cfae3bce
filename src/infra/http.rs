// ============================================================
// Layer 5 — HTTP Archive Fetcher
// ============================================================
// The production implementation of ArchiveFetcher: a simple
// blocking GET that streams the response body to a file.
//
// Deliberately minimal, matching the contract in Layer 3:
//   - no retries, no resuming, no checksum verification
//   - a non-2xx status or transport error is fatal
//   - a failure mid-download leaves whatever was written
//     (no partial-file cleanup)
//
// Reference: ureq crate documentation

use anyhow::{bail, Context, Result};
use std::{fs::File, io, path::Path};

use crate::domain::traits::ArchiveFetcher;

/// Blocking GET-and-save fetcher built on ureq.
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let response = ureq::get(url)
            .call()
            .with_context(|| format!("GET {url} failed"))?;

        if response.status() != 200 {
            bail!("GET {} returned HTTP {}", url, response.status());
        }

        let mut file = File::create(dest)
            .with_context(|| format!("Cannot create '{}'", dest.display()))?;
        let mut body = response.into_reader();
        let bytes = io::copy(&mut body, &mut file)
            .with_context(|| format!("Cannot save '{}'", dest.display()))?;

        tracing::info!("Saved {} bytes to '{}'", bytes, dest.display());
        Ok(())
    }
}

//! On-disk cached store for the Unicode font family used by the fixed-page
//! renderer.
//!
//! The faces (regular + bold, covering Latin and Arabic scripts) are fetched
//! over HTTP once and cached at a fixed well-known path. Concurrent
//! first-time downloads may race on that path; writes go through a temp file
//! in the cache directory followed by an atomic rename, so the last writer
//! wins and a reader never observes a torn file. A missing or zero-byte
//! cache entry re-triggers the fetch instead of failing permanently.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::contract::{FontSet, FontSource};
use crate::error::FontResourceError;

/// Amiri covers Latin plus Arabic with a regular and a bold weight.
pub const DEFAULT_REGULAR_URL: &str =
    "https://raw.githubusercontent.com/google/fonts/main/ofl/amiri/Amiri-Regular.ttf";
pub const DEFAULT_BOLD_URL: &str =
    "https://raw.githubusercontent.com/google/fonts/main/ofl/amiri/Amiri-Bold.ttf";

/// Fixed cache file names; the cache directory plus these names is the
/// process-wide well-known font path.
pub const REGULAR_FILE: &str = "cv-forge-regular.ttf";
pub const BOLD_FILE: &str = "cv-forge-bold.ttf";

/// Font store backed by a fixed cache directory and two fetch URLs.
pub struct CachedFontStore {
    cache_dir: PathBuf,
    regular_url: String,
    bold_url: String,
    http: reqwest::Client,
}

impl CachedFontStore {
    /// Store with the default Amiri URLs, cached under `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self::with_urls(cache_dir, DEFAULT_REGULAR_URL, DEFAULT_BOLD_URL)
    }

    /// Store with the default cache location under the system temp dir.
    pub fn default_location() -> Self {
        Self::new(std::env::temp_dir().join("cv-forge-fonts"))
    }

    pub fn with_urls(
        cache_dir: impl Into<PathBuf>,
        regular_url: impl Into<String>,
        bold_url: impl Into<String>,
    ) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            regular_url: regular_url.into(),
            bold_url: bold_url.into(),
            http: reqwest::Client::new(),
        }
    }

    async fn ensure_face(&self, file_name: &str, url: &str) -> Result<Vec<u8>, FontResourceError> {
        let path = self.cache_dir.join(file_name);

        match std::fs::read(&path) {
            Ok(bytes) if looks_like_font(&bytes) => {
                debug!(path = %path.display(), size = bytes.len(), "Font cache hit");
                return Ok(bytes);
            }
            Ok(bytes) => {
                warn!(path = %path.display(), size = bytes.len(), "Cached font invalid, re-fetching");
            }
            Err(_) => {
                debug!(path = %path.display(), "Font cache miss, fetching");
            }
        }

        // One fetch attempt per ensure; a second failure fails the render.
        let bytes = self.fetch(url).await?;
        if !looks_like_font(&bytes) {
            return Err(FontResourceError::Invalid { path });
        }
        self.write_atomic(&path, &bytes);
        Ok(bytes)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FontResourceError> {
        info!(url, "Fetching font resource");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FontResourceError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FontResourceError::Fetch {
                url: url.to_string(),
                reason: format!("status {status}"),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FontResourceError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }

    /// Best-effort cache write; the fetched bytes are returned to the caller
    /// either way, so a failed persist only costs a re-fetch next time.
    fn write_atomic(&self, path: &Path, bytes: &[u8]) {
        let result = std::fs::create_dir_all(&self.cache_dir)
            .map_err(|e| e.to_string())
            .and_then(|_| {
                let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir)
                    .map_err(|e| e.to_string())?;
                tmp.write_all(bytes).map_err(|e| e.to_string())?;
                tmp.persist(path).map_err(|e| e.to_string())?;
                Ok(())
            });
        match result {
            Ok(()) => info!(path = %path.display(), size = bytes.len(), "Cached font resource"),
            Err(reason) => {
                warn!(path = %path.display(), reason, "Failed to cache font resource")
            }
        }
    }
}

#[async_trait]
impl FontSource for CachedFontStore {
    async fn ensure(&self) -> Result<FontSet, FontResourceError> {
        let (regular, bold) = futures::try_join!(
            self.ensure_face(REGULAR_FILE, &self.regular_url),
            self.ensure_face(BOLD_FILE, &self.bold_url),
        )?;
        Ok(FontSet { regular, bold })
    }
}

/// Sniffs the sfnt magic of a TrueType/OpenType face. A zero-length or
/// truncated file fails this check and counts as a cache miss.
fn looks_like_font(bytes: &[u8]) -> bool {
    if bytes.len() < 4 {
        return false;
    }
    matches!(
        &bytes[0..4],
        [0x00, 0x01, 0x00, 0x00] | b"OTTO" | b"true" | b"ttcf"
    )
}

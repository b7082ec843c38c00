//! Lazy file-backed message cache.
//!
//! Each file-backed command reply is read from disk once, run through
//! emoji shortcode substitution, and kept in memory for the rest of the
//! process. Entries are immutable and never evicted.

use std::collections::HashMap;
use std::path::Path;

use tokio::io::AsyncReadExt;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::{BotError, Result};
use crate::emoji::emojize;

/// Byte budget for a single message file; content past the cap is dropped.
pub const MAX_MESSAGE_BYTES: usize = 4096;

/// Mapping from logical key to resolved reply text.
///
/// Constructed once at startup and shared by reference with every handler.
/// A key is absent until its first successful load; after that the key
/// alone determines the text and the locator is ignored.
pub struct MessageCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MessageCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached text for `key`, loading it from `path` on first use.
    ///
    /// On a miss the file is read (at most `max_bytes` bytes), transformed
    /// with [`emojize`], and stored under `key`. Concurrent first requests
    /// may both read the file; the first store wins and every caller
    /// observes the same text. A failed read propagates as
    /// [`BotError::ResourceUnavailable`] and leaves the key absent, so a
    /// later request retries the load.
    pub async fn get_or_load(
        &self,
        key: &str,
        path: impl AsRef<Path>,
        max_bytes: usize,
    ) -> Result<String> {
        if let Some(text) = self.entries.read().await.get(key) {
            debug!(key, "Message cache hit");
            return Ok(text.clone());
        }

        let path = path.as_ref();
        let raw = read_capped(path, max_bytes)
            .await
            .map_err(|source| BotError::ResourceUnavailable {
                path: path.display().to_string(),
                source,
            })?;
        let text = emojize(&raw);

        let mut entries = self.entries.write().await;
        if let Some(existing) = entries.get(key) {
            // lost a first-access race; keep the already-stored value
            debug!(key, "Message cache filled concurrently");
            return Ok(existing.clone());
        }
        info!(key, path = %path.display(), bytes = text.len(), "Message cache filled");
        entries.insert(key.to_string(), text.clone());
        Ok(text)
    }

    /// Whether `key` has been filled.
    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}

impl Default for MessageCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads at most `max_bytes` bytes from `path` as UTF-8.
///
/// A cap that lands inside a multi-byte character truncates at the last
/// complete one; a file with genuinely invalid UTF-8 is decoded lossily.
async fn read_capped(path: &Path, max_bytes: usize) -> std::io::Result<String> {
    let file = tokio::fs::File::open(path).await?;
    let mut buf = Vec::new();
    file.take(max_bytes as u64).read_to_end(&mut buf).await?;

    match String::from_utf8(buf) {
        Ok(text) => Ok(text),
        Err(err) => {
            let utf8_err = err.utf8_error();
            let bytes = err.into_bytes();
            if utf8_err.error_len().is_none() {
                // the cap split a trailing multi-byte character
                Ok(String::from_utf8_lossy(&bytes[..utf8_err.valid_up_to()]).into_owned())
            } else {
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

//! JSON file storage.
//!
//! The pool is a single JSON array of `{ "id", "prompt", "answer" }`
//! records. Writes go to a sibling temp file which is then renamed over the
//! target, so a crash mid-save leaves the previous pool intact.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use flashzilla_core::Card;

use crate::{CardStore, StoreError, decode_cards, ensure_unique};

/// Card pool persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the pool file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CardStore for FileStore {
    fn load(&self) -> Result<Vec<Card>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no card pool yet");
                return Ok(Vec::new());
            },
            Err(err) => return Err(err.into()),
        };

        let cards = decode_cards(&bytes)?;
        tracing::debug!(path = %self.path.display(), cards = cards.len(), "card pool loaded");
        Ok(cards)
    }

    fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        ensure_unique(cards)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec_pretty(cards)?;
        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!(path = %self.path.display(), cards = cards.len(), "card pool saved");
        Ok(())
    }
}

//! Deck store keeping one pretty-printed JSON record per deck in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use deckhand_engine::codec::DeckRecord;
use deckhand_engine::errors::DeckError;
use deckhand_engine::store::{DeckId, DeckStore};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ids become file names, so only `[A-Za-z0-9-]` is accepted.
    fn path(&self, id: &DeckId) -> Result<PathBuf, DeckError> {
        let valid = !id.as_str().is_empty()
            && id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(DeckError::NotFound(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }
}

impl DeckStore for FileStore {
    fn load(&self, id: &DeckId) -> Result<DeckRecord, DeckError> {
        let path = self.path(id)?;
        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DeckError::NotFound(id.to_string()),
            _ => DeckError::Store(format!("{}: {}", path.display(), e)),
        })?;
        serde_json::from_str(&text)
            .map_err(|e| DeckError::Decode(format!("{}: {}", path.display(), e)))
    }

    /// Writes to a temporary file next to the record and renames it over the
    /// old one, so a record is never half written.
    fn save(&mut self, id: &DeckId, record: &DeckRecord) -> Result<(), DeckError> {
        let path = self.path(id)?;
        let tmp = self.dir.join(format!(".{}.json.tmp", id));
        let text =
            serde_json::to_string_pretty(record).map_err(|e| DeckError::Store(e.to_string()))?;
        fs::write(&tmp, text)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| DeckError::Store(format!("{}: {}", path.display(), e)))?;
        tracing::trace!(deck_id = %id, path = %path.display(), "wrote deck record");
        Ok(())
    }

    fn delete(&mut self, id: &DeckId) -> Result<(), DeckError> {
        let path = self.path(id)?;
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DeckError::NotFound(id.to_string()),
            _ => DeckError::Store(format!("{}: {}", path.display(), e)),
        })
    }
}

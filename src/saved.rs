//! Saved ("hearted") decks, persisted as a JSON array of deck ids.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{FinderError, Result};

/// An ordered set of deck ids backed by a JSON file.
///
/// Every mutation is written through to disk: the ids are serialized to a
/// temp file in the same directory which then replaces the target.
#[derive(Debug)]
pub struct SavedDecks {
    path: PathBuf,
    ids: Vec<String>,
}

impl SavedDecks {
    /// Open the store at `path`. A missing file is an empty store; a corrupt
    /// one is logged and treated as empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let ids = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
                Ok(ids) => dedup(ids),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "corrupt saved decks file, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, ids })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Save the deck if it is not saved, otherwise remove it.
    ///
    /// Returns whether the deck is saved afterwards. The in-memory set only
    /// changes once the write succeeds.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        if id.trim().is_empty() {
            return Err(FinderError::InvalidArgument("Deck id must not be empty".into()));
        }
        let mut ids = self.ids.clone();
        let now_saved = match ids.iter().position(|s| s == id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };
        self.replace(ids)?;
        Ok(now_saved)
    }

    /// Remove the deck if saved. Returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if !self.is_saved(id) {
            return Ok(false);
        }
        let ids = self.ids.iter().filter(|s| *s != id).cloned().collect();
        self.replace(ids)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.replace(Vec::new())
    }

    fn replace(&mut self, ids: Vec<String>) -> Result<()> {
        persist(&self.path, &ids)?;
        self.ids = ids;
        Ok(())
    }
}

fn persist(path: &Path, ids: &[String]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    serde_json::to_writer(&mut tmp, ids)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| FinderError::Io(e.error))?;
    Ok(())
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

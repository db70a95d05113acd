//! Static catalog loader.
//!
//! Reads the deck, card-set and decklist JSON files from a data directory.
//! Files may be plain or gzip-compressed (`.json.gz`). When a file is missing
//! and a remote catalog URL is configured, it is downloaded once into the data
//! directory. The loaded catalog is immutable.

use crate::config;
use crate::error::{FinderError, Result};
use crate::models::{CardSet, Deck, Decklist};
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything loaded from the data directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub decks: Vec<Deck>,
    pub card_sets: Vec<CardSet>,
    /// Full decklists keyed by precon id.
    pub decklists: HashMap<String, Decklist>,
}

impl Catalog {
    /// Build a catalog directly from in-memory data.
    pub fn from_parts(decks: Vec<Deck>, card_sets: Vec<CardSet>, decklists: Vec<Decklist>) -> Self {
        let decklists = decklists
            .into_iter()
            .map(|d| (d.precon_id.clone(), d))
            .collect();
        Self {
            decks,
            card_sets,
            decklists,
        }
    }
}

/// Locates, downloads and parses catalog files.
pub struct CatalogStore {
    /// Directory holding the catalog files.
    pub data_dir: PathBuf,
    /// Base URL the catalog files can be downloaded from, if any.
    pub catalog_url: Option<String>,
    /// If true, never download (use local files only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl CatalogStore {
    /// Create a new store, creating `data_dir` if it does not exist.
    pub fn new(
        data_dir: Option<PathBuf>,
        catalog_url: Option<String>,
        offline: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            data_dir: dir,
            catalog_url,
            offline,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| FinderError::Config("HTTP client unavailable".into()))
    }

    /// Download a single file from the catalog URL.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never leaves a corrupt partial file behind.
    fn download_file(&mut self, base: &str, filename: &str, dest: &Path) -> Result<()> {
        let url = format!("{}/{}", base.trim_end_matches('/'), filename);
        tracing::info!(%url, "downloading catalog file");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_dest = dest.with_extension("json.tmp");

        let client = self.client()?.clone();
        let result = (|| -> Result<()> {
            let resp = client.get(&url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Resolve a catalog file, preferring an existing `.json.gz` copy, then the
    /// plain `.json`, then a download.
    pub fn ensure_file(&mut self, name: &str) -> Result<PathBuf> {
        let files = config::catalog_files();
        let filename = *files
            .get(name)
            .ok_or_else(|| FinderError::NotFound(format!("Unknown catalog file: {}", name)))?;

        let local_path = self.data_dir.join(filename);
        let gz_path = self.data_dir.join(format!("{}.gz", filename));
        if gz_path.exists() {
            return Ok(gz_path);
        }
        if local_path.exists() {
            return Ok(local_path);
        }

        match (self.offline, self.catalog_url.clone()) {
            (false, Some(base)) => {
                self.download_file(&base, filename, &local_path)?;
                Ok(local_path)
            }
            _ => Err(FinderError::NotFound(format!(
                "Catalog file {} not found in {}",
                filename,
                self.data_dir.display()
            ))),
        }
    }

    /// Load and parse a catalog file (handles `.gz` transparently).
    ///
    /// A downloaded file that fails to parse is deleted so the next call
    /// re-downloads a fresh copy.
    pub fn load<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        let path = self.ensure_file(name)?;
        tracing::debug!(path = %path.display(), "loading catalog file");

        match read_json(&path) {
            Ok(value) => Ok(value),
            Err(e) if self.catalog_url.is_some() && !self.offline => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt catalog file, removing");
                let _ = fs::remove_file(&path);
                Err(FinderError::NotFound(format!(
                    "Catalog file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown"),
                    e
                )))
            }
            Err(e) => Err(e),
        }
    }

    /// Load every decklist JSON under `<data_dir>/decklists`.
    ///
    /// A missing directory means no decklists; an unparsable file is skipped.
    pub fn load_decklists(&self) -> Result<Vec<Decklist>> {
        let dir = self.data_dir.join(config::DECKLIST_DIR);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
                name.ends_with(".json") || name.ends_with(".json.gz")
            })
            .collect();
        entries.sort();

        let mut decklists = Vec::with_capacity(entries.len());
        for path in entries {
            match read_json::<Decklist>(&path) {
                Ok(list) => decklists.push(list),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable decklist")
                }
            }
        }
        Ok(decklists)
    }

    /// Load decks, card sets and decklists.
    ///
    /// The card-set file is optional; a missing one yields no card sets.
    pub fn load_catalog(&mut self) -> Result<Catalog> {
        let decks: Vec<Deck> = self.load("decks")?;
        let card_sets: Vec<CardSet> = match self.load("card_sets") {
            Ok(sets) => sets,
            Err(FinderError::NotFound(msg)) => {
                tracing::warn!(%msg, "no card sets loaded");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        let decklists = self.load_decklists()?;

        tracing::debug!(
            decks = decks.len(),
            card_sets = card_sets.len(),
            decklists = decklists.len(),
            "catalog loaded"
        );
        Ok(Catalog::from_parts(decks, card_sets, decklists))
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let is_gz = path.extension().and_then(|e| e.to_str()) == Some("gz");
    let contents = if is_gz {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut buf_reader = BufReader::new(decoder);
        let mut contents = String::new();
        buf_reader.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

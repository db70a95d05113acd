//! Async wrapper around [`PreconFinder`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all finder operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! Scryfall and LLM clients are blocking, and catalog loading reads files.
//!
//! # Example
//!
//! ```no_run
//! use precon_finder::{AsyncPreconFinder, PathType, UserPreferences};
//!
//! #[tokio::main]
//! async fn main() {
//!     let finder = AsyncPreconFinder::builder().data_dir("data").build().await.unwrap();
//!
//!     let prefs = UserPreferences { vibe: Some("creepy".into()), ..Default::default() };
//!     let matches = finder.find_matches(prefs, PathType::Vibes).await.unwrap();
//!
//!     // Run any sync method via closure
//!     let count = finder.run(|f| Ok(f.decks().count())).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{FinderError, Result};
use crate::{MatchResult, PathType, PreconFinder, UserPreferences};

// ---------------------------------------------------------------------------
// AsyncPreconFinderBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPreconFinder`].
pub struct AsyncPreconFinderBuilder {
    data_dir: Option<PathBuf>,
    catalog_url: Option<String>,
    offline: bool,
    timeout: Duration,
    saved_decks_path: Option<PathBuf>,
    llm_api_key: Option<String>,
    llm_gateway_url: Option<String>,
    llm_model: Option<String>,
}

impl Default for AsyncPreconFinderBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_url: None,
            offline: false,
            timeout: Duration::from_secs(30),
            saved_decks_path: None,
            llm_api_key: None,
            llm_gateway_url: None,
            llm_model: None,
        }
    }
}

impl AsyncPreconFinderBuilder {
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn saved_decks_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.saved_decks_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn llm_api_key(mut self, key: Option<String>) -> Self {
        self.llm_api_key = key;
        self
    }

    pub fn llm_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.llm_gateway_url = Some(url.into());
        self
    }

    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = Some(model.into());
        self
    }

    /// Build the async finder.
    ///
    /// Catalog loading runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncPreconFinder> {
        tokio::task::spawn_blocking(move || {
            let mut builder = PreconFinder::builder()
                .offline(self.offline)
                .timeout(self.timeout);
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(url) = self.catalog_url {
                builder = builder.catalog_url(url);
            }
            if let Some(path) = self.saved_decks_path {
                builder = builder.saved_decks_path(path);
            }
            if let Some(key) = self.llm_api_key {
                builder = builder.llm_api_key(key);
            }
            if let Some(url) = self.llm_gateway_url {
                builder = builder.llm_gateway_url(url);
            }
            if let Some(model) = self.llm_model {
                builder = builder.llm_model(model);
            }
            let finder = builder.build()?;
            Ok(AsyncPreconFinder::new(finder))
        })
        .await
        .map_err(|e| FinderError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPreconFinder
// ---------------------------------------------------------------------------

/// Async wrapper around [`PreconFinder`].
///
/// Cheap to clone; clones share the same finder. The finder is guarded by a
/// [`Mutex`] since it uses `RefCell` internally.
#[derive(Clone)]
pub struct AsyncPreconFinder {
    inner: Arc<Mutex<PreconFinder>>,
}

impl AsyncPreconFinder {
    pub fn builder() -> AsyncPreconFinderBuilder {
        AsyncPreconFinderBuilder::default()
    }

    /// Wrap an already-built finder.
    pub fn new(finder: PreconFinder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(finder)),
        }
    }

    /// Run a sync finder operation on the blocking thread pool.
    ///
    /// The closure receives an `&PreconFinder` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PreconFinder) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let finder = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = finder
                .lock()
                .map_err(|_| FinderError::InvalidArgument("Finder lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| FinderError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Rank every deck against `prefs`.
    pub async fn find_matches(
        &self,
        prefs: UserPreferences,
        path: PathType,
    ) -> Result<Vec<MatchResult>> {
        self.run(move |f| Ok(f.find_matches(&prefs, path))).await
    }

    /// Save or unsave a deck. Returns whether it is saved afterwards.
    pub async fn toggle_saved(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.run(move |f| f.toggle_saved(&id)).await
    }

    pub async fn interpretation(&self, custom_text: &str) -> Result<String> {
        let text = custom_text.to_string();
        self.run(move |f| f.interpretation(&text)).await
    }
}

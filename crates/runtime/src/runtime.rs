//! Content runtime: loads a pack and republishes it on reload.
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use patch_content::{ContentFactory, LoadResult};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::snapshot::ContentSnapshot;
use crate::store::ContentStore;

/// Owns the data directory and the published snapshot.
///
/// [`ContentStore`] is the cloneable read side handed to consumers; the
/// runtime is the only writer.
pub struct PatchRuntime {
    config: RuntimeConfig,
    store: Arc<ContentStore>,
    // Serializes reloads so versions are published in order.
    reload_lock: Mutex<()>,
}

impl PatchRuntime {
    /// Loads the pack in `config.data_dir` and publishes it as version 1.
    ///
    /// # Errors
    ///
    /// Fails if the directory is missing or any content file is invalid.
    pub fn start(config: RuntimeConfig) -> Result<Self> {
        if !config.data_dir.is_dir() {
            return Err(RuntimeError::MissingDataDir(config.data_dir.clone()));
        }

        let runtime = Self {
            config,
            store: Arc::new(ContentStore::new()),
            reload_lock: Mutex::new(()),
        };
        runtime.reload()?;
        Ok(runtime)
    }

    /// Rebuilds the snapshot from disk and swaps it in.
    ///
    /// On failure the previously published snapshot stays in place.
    pub fn reload(&self) -> Result<Arc<ContentSnapshot>> {
        let _guard = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let version = self.store.version() + 1;
        let data_dir = &self.config.data_dir;
        debug!(path = %data_dir.display(), version, "loading content");

        let snapshot = match load_snapshot(data_dir, version) {
            Ok(snapshot) => snapshot,
            Err(source) => {
                warn!(
                    path = %data_dir.display(),
                    error = %source,
                    "content reload failed; keeping previous snapshot"
                );
                return Err(RuntimeError::Load {
                    path: data_dir.clone(),
                    source,
                });
            }
        };

        let metadata = snapshot.metadata();
        info!(
            version,
            tokens = snapshot.tokens().len(),
            objects = metadata.map_or(0, |m| m.objects.len()),
            characters = metadata.map_or(0, |m| m.characters.len()),
            quests = metadata.map_or(0, |m| m.adventure_guild_quests.len()),
            "content loaded"
        );

        let snapshot = Arc::new(snapshot);
        self.store.publish(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Read handle shared with consumers.
    pub fn store(&self) -> Arc<ContentStore> {
        Arc::clone(&self.store)
    }

    /// Currently published snapshot.
    pub fn snapshot(&self) -> Option<Arc<ContentSnapshot>> {
        self.store.snapshot()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

fn load_snapshot(data_dir: &Path, version: u64) -> LoadResult<ContentSnapshot> {
    let factory = ContentFactory::new(data_dir);
    let config = factory.load_config()?;
    let tokens = factory.load_tokens(&config)?;
    let metadata = factory.load_metadata(&config)?;

    if metadata.is_none() {
        debug!(file = %config.metadata_file, "no metadata file; overrides disabled");
    }

    Ok(ContentSnapshot::new(version, config, tokens, metadata))
}

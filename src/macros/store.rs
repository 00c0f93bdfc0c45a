//! In-memory macro collection mirrored to a JSON data file.
//!
//! Every mutation writes the whole list back immediately, so after a
//! successful call the file and memory hold the same records in the same
//! order. A failed load leaves the store unavailable until `reload()`
//! succeeds.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::model::Macro;
use super::persistence::{JsonFilePersistence, MacroPersistence};
use crate::config::{MacrosConfig, DATA_FILE_NAME};
use crate::error::{MacroError, Result};

#[derive(Debug)]
pub struct MacroStore<P: MacroPersistence = JsonFilePersistence> {
    persistence: P,
    /// Folder from settings, tried first on every load
    configured_folder: PathBuf,
    /// Plugin directory, used when the configured folder doesn't exist
    fallback_folder: PathBuf,
    /// Folder resolved by the last load
    data_folder: PathBuf,
    /// `None` until a load succeeds
    macros: Option<Vec<Macro>>,
}

impl MacroStore<JsonFilePersistence> {
    /// Create an unloaded store for the configured data folder
    pub fn new(config: &MacrosConfig) -> Self {
        Self::with_persistence(
            JsonFilePersistence,
            config.data_folder(),
            config.plugin_directory.clone(),
        )
    }
}

impl<P: MacroPersistence> MacroStore<P> {
    pub fn with_persistence(
        persistence: P,
        configured_folder: impl Into<PathBuf>,
        fallback_folder: impl Into<PathBuf>,
    ) -> Self {
        let configured_folder = configured_folder.into();
        MacroStore {
            persistence,
            data_folder: configured_folder.clone(),
            configured_folder,
            fallback_folder: fallback_folder.into(),
            macros: None,
        }
    }

    /// Read the whole list from the data file
    ///
    /// A missing data file is a first run: the store starts empty and an
    /// empty list is written straight away.
    #[instrument(name = "macros_load", skip(self))]
    pub fn load(&mut self) -> Result<()> {
        self.data_folder = if self.persistence.folder_exists(&self.configured_folder) {
            self.configured_folder.clone()
        } else {
            debug!(
                configured = %self.configured_folder.display(),
                fallback = %self.fallback_folder.display(),
                "Configured data folder missing, using plugin directory"
            );
            self.persistence.ensure_folder(&self.fallback_folder)?;
            self.fallback_folder.clone()
        };

        let file = self.data_file();
        match self.persistence.read_all(&file) {
            Ok(Some(macros)) => {
                info!(path = %file.display(), count = macros.len(), "Loaded macros");
                self.macros = Some(macros);
                Ok(())
            }
            Ok(None) => {
                info!(path = %file.display(), "Macro data file not found, starting fresh");
                self.macros = Some(Vec::new());
                self.save()
            }
            Err(e) => {
                warn!(path = %file.display(), error = %e, "Failed to load macros");
                self.macros = None;
                Err(e)
            }
        }
    }

    /// Discard the in-memory list and load it again
    pub fn reload(&mut self) -> Result<()> {
        self.load()
    }

    /// Write the whole list to the data file
    ///
    /// An unloaded list is written as empty. On failure the in-memory list
    /// is left as it was so the save can be retried.
    #[instrument(name = "macros_save", skip(self))]
    pub fn save(&mut self) -> Result<()> {
        let file = self.data_file();
        let macros = self.macros.get_or_insert_with(Vec::new);
        self.persistence.write_all(&file, macros)?;
        info!(path = %file.display(), count = macros.len(), "Saved macros");
        Ok(())
    }

    /// Macros matching `predicate`, most recently created first
    ///
    /// Records with equal creation times keep their stored order.
    pub fn find<F>(&self, predicate: F) -> Result<Vec<Macro>>
    where
        F: Fn(&Macro) -> bool,
    {
        let mut found: Vec<Macro> = self
            .loaded()?
            .iter()
            .filter(|m| predicate(m))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        Ok(found)
    }

    /// Append `item` and save
    ///
    /// Returns `Ok(false)` without touching the data file when the content
    /// is empty.
    pub fn add(&mut self, item: Macro) -> Result<bool> {
        let macros = self.loaded_mut()?;
        if !item.has_content() {
            debug!(key = %item.key, "Ignoring macro with empty content");
            return Ok(false);
        }

        debug!(key = %item.key, "Adding macro");
        macros.push(item);
        self.save()?;
        Ok(true)
    }

    /// Remove the first macro whose key equals `item.key`, then save
    ///
    /// Content is ignored for the lookup. The list is saved even when no
    /// record matched. Returns whether a record was removed.
    pub fn remove(&mut self, item: &Macro) -> Result<bool> {
        let macros = self.loaded_mut()?;
        let removed = match macros.iter().position(|m| m.key == item.key) {
            Some(index) => {
                macros.remove(index);
                true
            }
            None => false,
        };

        debug!(key = %item.key, removed, "Removing macro");
        self.save()?;
        Ok(removed)
    }

    /// Remove every macro, then save
    pub fn remove_all(&mut self) -> Result<()> {
        let macros = self.loaded_mut()?;
        let count = macros.len();
        macros.clear();
        debug!(count, "Removing all macros");
        self.save()
    }

    /// Every macro in stored order
    pub fn all(&self) -> Result<&[Macro]> {
        self.loaded().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.macros.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loaded(&self) -> bool {
        self.macros.is_some()
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_folder.join(DATA_FILE_NAME)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn loaded(&self) -> Result<&Vec<Macro>> {
        self.macros.as_ref().ok_or(MacroError::StoreUnavailable)
    }

    fn loaded_mut(&mut self) -> Result<&mut Vec<Macro>> {
        self.macros.as_mut().ok_or(MacroError::StoreUnavailable)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

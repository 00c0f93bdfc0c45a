//! Load-all / save-all access to the macro data file.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::model::Macro;
use crate::error::{MacroError, Result};

/// Storage backend for the macro list
///
/// The store only ever reads or writes the whole list at once.
pub trait MacroPersistence {
    fn folder_exists(&self, folder: &Path) -> bool;

    fn ensure_folder(&self, folder: &Path) -> Result<()>;

    /// Read every macro from `file`. `Ok(None)` means the file doesn't exist.
    fn read_all(&self, file: &Path) -> Result<Option<Vec<Macro>>>;

    /// Replace the contents of `file` with `macros`. Readers see either the
    /// old or the new list, never a mix.
    fn write_all(&self, file: &Path, macros: &[Macro]) -> Result<()>;
}

/// JSON array on the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFilePersistence;

impl MacroPersistence for JsonFilePersistence {
    fn folder_exists(&self, folder: &Path) -> bool {
        folder.is_dir()
    }

    fn ensure_folder(&self, folder: &Path) -> Result<()> {
        std::fs::create_dir_all(folder).map_err(|e| MacroError::PersistenceWrite {
            path: folder.to_path_buf(),
            message: format!("failed to create directory: {}", e),
        })
    }

    fn read_all(&self, file: &Path) -> Result<Option<Vec<Macro>>> {
        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(MacroError::PersistenceRead {
                    path: file.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        // A literal `null` is how an empty list used to be written
        let macros: Option<Vec<Macro>> =
            serde_json::from_str(&text).map_err(|e| MacroError::PersistenceRead {
                path: file.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Some(macros.unwrap_or_default()))
    }

    fn write_all(&self, file: &Path, macros: &[Macro]) -> Result<()> {
        let write_err = |message: String| MacroError::PersistenceWrite {
            path: file.to_path_buf(),
            message,
        };

        let json = serde_json::to_string(macros).map_err(|e| write_err(e.to_string()))?;

        // Atomic write: write to temp file, then rename
        let temp_path = file.with_extension("json.tmp");
        std::fs::write(&temp_path, &json).map_err(|e| write_err(e.to_string()))?;
        std::fs::rename(&temp_path, file).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            write_err(e.to_string())
        })?;

        debug!(path = %file.display(), bytes = json.len(), "Wrote macro data file");
        Ok(())
    }
}

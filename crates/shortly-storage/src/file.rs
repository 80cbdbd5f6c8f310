use shortly_core::{KeyValueStorage, StorageError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// File-backed implementation of [`KeyValueStorage`].
///
/// Each key is stored in its own file `<dir>/<key>.json`. Writes go to a
/// temporary sibling file which is synced and then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens a storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str, extension: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{extension}")))
    }
}

fn io_error(path: &Path, err: io::Error) -> StorageError {
    let message = format!("{}: {}", path.display(), err);
    match err.kind() {
        io::ErrorKind::PermissionDenied => StorageError::ReadOnly(message),
        io::ErrorKind::NotFound => StorageError::Unavailable(message),
        _ => StorageError::Io(message),
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key, VALUE_EXTENSION)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(path = %path.display(), bytes = value.len(), "read stored value");
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key, VALUE_EXTENSION)?;
        let temp = self.path_for(key, TEMP_EXTENSION)?;

        let written = fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(value.as_bytes())?;
                file.sync_all()
            })
            .map_err(|e| io_error(&temp, e))
            .and_then(|()| fs::rename(&temp, &path).map_err(|e| io_error(&path, e)));
        if let Err(e) = written {
            // the target still holds the previous value; drop the partial copy
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        #[cfg(unix)]
        if let Err(e) = fs::File::open(&self.dir).and_then(|dir| dir.sync_all()) {
            warn!(dir = %self.dir.display(), error = %e, "failed to sync storage directory");
        }

        debug!(path = %path.display(), bytes = value.len(), "wrote stored value");
        Ok(())
    }
}

use cb_core::{CoreError, Result as CoreErrorResult, SessionStorage};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

/// Keeps the session token in a small JSON file between CLI runs.
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> CoreErrorResult<Option<String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(unavailable(&self.path, e)),
        };

        match serde_json::from_str::<SessionFile>(&contents) {
            Ok(file) if !file.token.is_empty() => Ok(Some(file.token)),
            Ok(_) => Ok(None),
            Err(e) => {
                // Treat a corrupt file as signed out; the next sign-in rewrites it
                log::warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    fn store(&self, token: &str) -> CoreErrorResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
        }

        let contents = serde_json::to_string(&SessionFile {
            token: token.to_string(),
        })
        .map_err(|e| CoreError::store_unavailable(e.to_string()))?;

        std::fs::write(&self.path, contents).map_err(|e| unavailable(&self.path, e))
    }

    fn clear(&self) -> CoreErrorResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable(&self.path, e)),
        }
    }
}

#[track_caller]
fn unavailable(path: &Path, e: std::io::Error) -> CoreError {
    CoreError::store_unavailable(format!("{}: {e}", path.display()))
}

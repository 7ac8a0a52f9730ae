use crate::{CoreError, Result as CoreErrorResult, SessionStorage};

use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    token: Mutex<Option<String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token<S: Into<String>>(token: S) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> CoreErrorResult<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|e| CoreError::store_unavailable(format!("Session slot poisoned: {e}")))?;
        Ok(guard.clone())
    }

    fn store(&self, token: &str) -> CoreErrorResult<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| CoreError::store_unavailable(format!("Session slot poisoned: {e}")))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CoreErrorResult<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| CoreError::store_unavailable(format!("Session slot poisoned: {e}")))?;
        *guard = None;
        Ok(())
    }
}

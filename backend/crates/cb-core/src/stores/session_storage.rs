use crate::Result as CoreErrorResult;

/// Durable client-side slot holding at most one session token.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> CoreErrorResult<Option<String>>;

    fn store(&self, token: &str) -> CoreErrorResult<()>;

    /// Clearing an empty slot is not an error.
    fn clear(&self) -> CoreErrorResult<()>;
}

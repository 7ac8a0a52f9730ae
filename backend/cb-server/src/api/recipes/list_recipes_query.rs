use serde::Deserialize;

/// Query parameters for listing recipes
#[derive(Debug, Deserialize)]
pub struct ListRecipesQuery {
    /// `store` (default) or `newest`
    pub order: Option<String>,
}

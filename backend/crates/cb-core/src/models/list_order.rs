use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering requested from the recipe store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ListOrder {
    /// Whatever order the store keeps (insertion order for the bundled stores)
    #[default]
    #[serde(rename = "store")]
    Store,
    #[serde(rename = "newest")]
    NewestFirst,
}

impl ListOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::NewestFirst => "newest",
        }
    }
}

impl FromStr for ListOrder {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "store" => Ok(Self::Store),
            "newest" => Ok(Self::NewestFirst),
            _ => Err(CoreError::invalid_input(
                "order",
                format!("Unknown order '{s}', expected 'store' or 'newest'."),
            )),
        }
    }
}

impl std::fmt::Display for ListOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

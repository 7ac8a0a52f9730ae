//! Response bodies of the REST API, as sent by cb-server.

use crate::{CliClientResult, ClientError};

use cb_core::{Identity, Recipe};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}

impl From<UserDto> for Identity {
    fn from(user: UserDto) -> Self {
        Identity {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeDto {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub image: Option<String>,
    pub owner_id: Uuid,
    /// Unix milliseconds
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl TryFrom<RecipeDto> for Recipe {
    type Error = ClientError;

    #[track_caller]
    fn try_from(dto: RecipeDto) -> CliClientResult<Self> {
        let updated_at = match dto.updated_at {
            Some(millis) => Some(from_millis(millis)?),
            None => None,
        };

        Ok(Recipe {
            id: dto.id,
            title: dto.title,
            ingredients: dto.ingredients,
            steps: dto.steps,
            image: dto.image,
            owner_id: dto.owner_id,
            created_at: from_millis(dto.created_at)?,
            updated_at,
        })
    }
}

#[track_caller]
fn from_millis(millis: i64) -> CliClientResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ClientError::decode(format!("timestamp {millis} out of range")))
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeResponse {
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeResponse {
    pub recipe: RecipeDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeListResponse {
    pub recipes: Vec<RecipeDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub deleted_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

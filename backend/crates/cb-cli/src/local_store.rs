//! Local-only backend: users and recipes in one JSON file.
//!
//! Implements both store traits so the CLI runs without a server. The
//! session token is simply the identity id. Ownership and validation rules
//! match the server's.

use cb_auth::{hash_password, verify_password};
use cb_core::validation::{normalize_display_name, normalize_email, validate_new_password};
use cb_core::{
    AuthSession, CoreError, CredentialStore, Identity, ListOrder, Recipe, RecipeFields,
    RecipeStore, Result as CoreErrorResult, ValidationRules,
};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct LocalData {
    #[serde(default)]
    users: Vec<LocalUser>,
    #[serde(default)]
    recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LocalUser {
    #[serde(flatten)]
    identity: Identity,
    password_hash: String,
}

pub struct LocalStore {
    path: PathBuf,
    rules: ValidationRules,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rules: ValidationRules::default(),
            lock: Mutex::new(()),
        }
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> CoreErrorResult<LocalData> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(LocalData::default()),
            Err(e) => return Err(unavailable(&self.path, e)),
        };

        serde_json::from_str(&contents).map_err(|e| {
            CoreError::store_unavailable(format!("{} is corrupt: {e}", self.path.display()))
        })
    }

    /// Write to a sibling temp file, then rename over the original.
    async fn save(&self, data: &LocalData) -> CoreErrorResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| unavailable(parent, e))?;
        }

        let contents = serde_json::to_string_pretty(data)
            .map_err(|e| CoreError::store_unavailable(e.to_string()))?;
        let temp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|e| unavailable(&temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| unavailable(&self.path, e))
    }
}

#[async_trait]
impl CredentialStore for LocalStore {
    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreErrorResult<AuthSession> {
        let email = normalize_email(email)?;
        validate_new_password(password, &self.rules)?;

        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;

        if data.users.iter().any(|u| u.identity.email == email) {
            return Err(CoreError::duplicate_account(email));
        }

        let password_hash = hash_password(password)?;
        let identity = Identity::new(email, normalize_display_name(display_name));
        data.users.push(LocalUser {
            identity: identity.clone(),
            password_hash,
        });
        self.save(&data).await?;

        log::info!("Registered local account {}", identity.id);
        Ok(AuthSession {
            token: identity.id.to_string(),
            identity,
        })
    }

    async fn authenticate(&self, email: &str, password: &str) -> CoreErrorResult<AuthSession> {
        let email = normalize_email(email).map_err(|_| CoreError::invalid_credentials())?;

        let data = self.load().await?;
        let user = data
            .users
            .into_iter()
            .find(|u| u.identity.email == email)
            .ok_or_else(CoreError::invalid_credentials)?;

        verify_password(password, &user.password_hash)?;

        Ok(AuthSession {
            token: user.identity.id.to_string(),
            identity: user.identity,
        })
    }

    async fn resolve(&self, token: &str) -> CoreErrorResult<Identity> {
        let id = Uuid::parse_str(token)
            .map_err(|_| CoreError::invalid_token("local token is not an identity id"))?;

        let data = self.load().await?;
        data.users
            .into_iter()
            .map(|u| u.identity)
            .find(|identity| identity.id == id)
            .ok_or_else(|| CoreError::invalid_token(format!("no local account {id}")))
    }
}

#[async_trait]
impl RecipeStore for LocalStore {
    async fn list_all(&self, order: ListOrder) -> CoreErrorResult<Vec<Recipe>> {
        let mut recipes = self.load().await?.recipes;
        if order == ListOrder::NewestFirst {
            // Stable, so equal timestamps keep file order
            recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(recipes)
    }

    async fn get(&self, id: Uuid) -> CoreErrorResult<Recipe> {
        self.load()
            .await?
            .recipes
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id}")))
    }

    async fn create(&self, owner_id: Uuid, fields: RecipeFields) -> CoreErrorResult<Recipe> {
        let fields = fields.normalized(&self.rules)?;

        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let recipe = Recipe::new(owner_id, fields);
        data.recipes.push(recipe.clone());
        self.save(&data).await?;

        Ok(recipe)
    }

    async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        fields: RecipeFields,
    ) -> CoreErrorResult<Recipe> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let recipe = data
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id}")))?;

        recipe.ensure_owner(requester_id)?;
        recipe.apply(fields.normalized(&self.rules)?);
        let updated = recipe.clone();
        self.save(&data).await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid, requester_id: Uuid) -> CoreErrorResult<()> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let index = data
            .recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found(format!("Recipe {id}")))?;

        data.recipes[index].ensure_owner(requester_id)?;
        data.recipes.remove(index);
        self.save(&data).await
    }
}

#[track_caller]
fn unavailable(path: &Path, e: std::io::Error) -> CoreError {
    CoreError::store_unavailable(format!("{}: {e}", path.display()))
}

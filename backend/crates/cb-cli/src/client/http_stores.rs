//! Store adapters over the REST API.

use crate::Client;

use cb_core::{
    AuthSession, CoreError, CredentialStore, Identity, ListOrder, Recipe, RecipeFields,
    RecipeStore, Result as CoreErrorResult, SessionStorage,
};

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

/// Accounts live on the server; tokens are the server's bearer tokens.
pub struct HttpCredentialStore {
    client: Client,
}

impl HttpCredentialStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CredentialStore for HttpCredentialStore {
    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreErrorResult<AuthSession> {
        Ok(self.client.register(email, password, display_name).await?)
    }

    async fn authenticate(&self, email: &str, password: &str) -> CoreErrorResult<AuthSession> {
        Ok(self.client.login(email, password).await?)
    }

    async fn resolve(&self, token: &str) -> CoreErrorResult<Identity> {
        Ok(self.client.me(token).await?)
    }
}

/// Recipes live on the server.
///
/// Writes authenticate with the token in session storage. The server derives
/// the owner and requester from that token, so the ids passed in are only
/// used for logging.
pub struct HttpRecipeStore {
    client: Client,
    storage: Arc<dyn SessionStorage>,
}

impl HttpRecipeStore {
    pub fn new(client: Client, storage: Arc<dyn SessionStorage>) -> Self {
        Self { client, storage }
    }

    #[track_caller]
    fn token(&self) -> CoreErrorResult<String> {
        self.storage.load()?.ok_or_else(CoreError::unauthenticated)
    }
}

#[async_trait]
impl RecipeStore for HttpRecipeStore {
    async fn list_all(&self, order: ListOrder) -> CoreErrorResult<Vec<Recipe>> {
        Ok(self.client.list_recipes(order).await?)
    }

    async fn get(&self, id: Uuid) -> CoreErrorResult<Recipe> {
        Ok(self.client.get_recipe(id).await?)
    }

    async fn create(&self, owner_id: Uuid, fields: RecipeFields) -> CoreErrorResult<Recipe> {
        let token = self.token()?;
        log::debug!("Creating recipe as {owner_id}");
        Ok(self.client.create_recipe(&token, &fields).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        fields: RecipeFields,
    ) -> CoreErrorResult<Recipe> {
        let token = self.token()?;
        log::debug!("Updating recipe {id} as {requester_id}");
        Ok(self.client.update_recipe(&token, id, &fields).await?)
    }

    async fn delete(&self, id: Uuid, requester_id: Uuid) -> CoreErrorResult<()> {
        let token = self.token()?;
        log::debug!("Deleting recipe {id} as {requester_id}");
        self.client.delete_recipe(&token, id).await?;
        Ok(())
    }
}

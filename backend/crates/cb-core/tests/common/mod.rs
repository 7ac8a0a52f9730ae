#![allow(dead_code)]

use cb_core::{
    AuthSession, CoreError, CredentialStore, Identity, MemoryRecipeStore, MemorySessionStorage,
    RecipeDraft, RecipeFormController, RecipeListController, Result as CoreResult,
    SessionManager,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Credential store that keeps accounts in a map and hands out `token-<id>` tokens.
#[derive(Default)]
pub struct StubCredentialStore {
    accounts: Mutex<HashMap<String, (String, Identity)>>,
    unavailable: AtomicBool,
}

impl StubCredentialStore {
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub fn token_for(identity: &Identity) -> String {
        format!("token-{}", identity.id)
    }

    fn check(&self) -> CoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(CoreError::store_unavailable("stub offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for StubCredentialStore {
    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CoreResult<AuthSession> {
        self.check()?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(CoreError::duplicate_account(email));
        }
        let identity = Identity::new(email.to_string(), display_name.to_string());
        accounts.insert(
            email.to_string(),
            (password.to_string(), identity.clone()),
        );
        Ok(AuthSession {
            token: Self::token_for(&identity),
            identity,
        })
    }

    async fn authenticate(&self, email: &str, password: &str) -> CoreResult<AuthSession> {
        self.check()?;
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some((stored, identity)) if stored == password => Ok(AuthSession {
                token: Self::token_for(identity),
                identity: identity.clone(),
            }),
            _ => Err(CoreError::invalid_credentials()),
        }
    }

    async fn resolve(&self, token: &str) -> CoreResult<Identity> {
        self.check()?;
        let accounts = self.accounts.lock().unwrap();
        accounts
            .values()
            .map(|(_, identity)| identity)
            .find(|identity| Self::token_for(identity) == token)
            .cloned()
            .ok_or_else(|| CoreError::invalid_token("unknown token"))
    }
}

/// Everything a client screen needs, wired to in-memory stores.
pub struct TestApp {
    pub credentials: Arc<StubCredentialStore>,
    pub storage: Arc<MemorySessionStorage>,
    pub recipes: Arc<MemoryRecipeStore>,
    pub session: SessionManager,
    pub list: RecipeListController,
    pub form: RecipeFormController,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryRecipeStore::new()))
    }

    pub fn with_store(recipes: Arc<MemoryRecipeStore>) -> Self {
        Self::sharing(Arc::new(StubCredentialStore::default()), recipes)
    }

    /// A second client talking to the same backends, with its own session slot.
    pub fn sharing(credentials: Arc<StubCredentialStore>, recipes: Arc<MemoryRecipeStore>) -> Self {
        let storage = Arc::new(MemorySessionStorage::new());
        let session = SessionManager::new(credentials.clone(), storage.clone());
        Self {
            list: RecipeListController::new(recipes.clone()),
            form: RecipeFormController::new(recipes.clone()),
            credentials,
            storage,
            recipes,
            session,
        }
    }

    pub fn other_client(&self) -> Self {
        Self::sharing(self.credentials.clone(), self.recipes.clone())
    }

    pub async fn sign_up(&self, name: &str) -> Identity {
        self.session
            .sign_up(&format!("{name}@example.com"), "secret-password", name)
            .await
            .unwrap()
    }
}

pub fn draft(title: &str, ingredients: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        ingredients: ingredients.to_string(),
        steps: "Cook it.".to_string(),
        image: None,
    }
}

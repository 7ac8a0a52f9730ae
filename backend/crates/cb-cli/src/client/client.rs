use crate::CliClientResult;
use crate::client::wire::{
    AuthResponse, DeleteResponse, ErrorResponse, MeResponse, RecipeListResponse, RecipeResponse,
};
use crate::ClientError;

use cb_core::{AuthSession, Identity, ListOrder, Recipe, RecipeFields};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// HTTP client for the cb-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// `base_url` is the server root, e.g. "http://127.0.0.1:8000"
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send the request and decode either the success body or the error envelope.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(body) => {
                    ClientError::api_error(body.error.code, body.error.message, body.error.field)
                }
                Err(_) => ClientError::api_error(
                    format!("HTTP_{}", status.as_u16()),
                    String::from_utf8_lossy(&bytes).into_owned(),
                    None,
                ),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::decode(e.to_string()))
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> CliClientResult<AuthSession> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            email: &'a str,
            password: &'a str,
            display_name: &'a str,
        }

        let body = RegisterRequest {
            email,
            password,
            display_name,
        };
        let req = self
            .request(Method::POST, "/api/v1/register", None)
            .json(&body);
        let response: AuthResponse = self.execute(req).await?;

        Ok(AuthSession {
            identity: response.user.into(),
            token: response.token,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<AuthSession> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/login", None)
            .json(&LoginRequest { email, password });
        let response: AuthResponse = self.execute(req).await?;

        Ok(AuthSession {
            identity: response.user.into(),
            token: response.token,
        })
    }

    pub async fn me(&self, token: &str) -> CliClientResult<Identity> {
        let req = self.request(Method::GET, "/api/v1/me", Some(token));
        let response: MeResponse = self.execute(req).await?;
        Ok(response.user.into())
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    pub async fn list_recipes(&self, order: ListOrder) -> CliClientResult<Vec<Recipe>> {
        let path = format!("/api/v1/recipes?order={}", order.as_str());
        let req = self.request(Method::GET, &path, None);
        let response: RecipeListResponse = self.execute(req).await?;

        response
            .recipes
            .into_iter()
            .map(Recipe::try_from)
            .collect()
    }

    pub async fn get_recipe(&self, id: Uuid) -> CliClientResult<Recipe> {
        let req = self.request(Method::GET, &format!("/api/v1/recipes/{}", id), None);
        let response: RecipeResponse = self.execute(req).await?;
        Recipe::try_from(response.recipe)
    }

    pub async fn create_recipe(&self, token: &str, fields: &RecipeFields) -> CliClientResult<Recipe> {
        let req = self
            .request(Method::POST, "/api/v1/recipes", Some(token))
            .json(fields);
        let response: RecipeResponse = self.execute(req).await?;
        Recipe::try_from(response.recipe)
    }

    pub async fn update_recipe(
        &self,
        token: &str,
        id: Uuid,
        fields: &RecipeFields,
    ) -> CliClientResult<Recipe> {
        let req = self
            .request(Method::PUT, &format!("/api/v1/recipes/{}", id), Some(token))
            .json(fields);
        let response: RecipeResponse = self.execute(req).await?;
        Recipe::try_from(response.recipe)
    }

    /// Returns the id the server reports as deleted.
    pub async fn delete_recipe(&self, token: &str, id: Uuid) -> CliClientResult<Uuid> {
        let req = self.request(Method::DELETE, &format!("/api/v1/recipes/{}", id), Some(token));
        let response: DeleteResponse = self.execute(req).await?;
        Ok(response.deleted_id)
    }
}

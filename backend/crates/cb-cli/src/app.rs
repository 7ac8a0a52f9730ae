//! Runs one CLI command against the session, list and form controllers.

use crate::commands::Commands;
use crate::confirmation::prompt_line;

use cb_core::{
    Confirmation, CoreError, CredentialStore, DeleteOutcome, ListOrder, ListView,
    RecipeDraft, RecipeFormController, RecipeListController, RecipeStore, RenderableRecipe,
    Result as CoreErrorResult, SessionManager, SessionStorage, ValidationRules,
};

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

const EMPTY_LIST_MESSAGE: &str = "No recipes to show.";
const SIGN_OUT_PROMPT: &str = "Sign out?";

pub struct App {
    recipes: Arc<dyn RecipeStore>,
    session: SessionManager,
    list: RecipeListController,
    form: RecipeFormController,
}

impl App {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        recipes: Arc<dyn RecipeStore>,
        storage: Arc<dyn SessionStorage>,
        rules: ValidationRules,
    ) -> Self {
        Self {
            session: SessionManager::with_rules(credentials, storage, rules),
            list: RecipeListController::new(recipes.clone()),
            form: RecipeFormController::with_rules(recipes.clone(), rules),
            recipes,
        }
    }

    /// Execute `command`, returning the JSON document to print.
    pub async fn run(
        &mut self,
        command: Commands,
        confirmation: &dyn Confirmation,
    ) -> CoreErrorResult<Value> {
        let always: &dyn Confirmation = &|_: &str| true;

        match command {
            Commands::Signup {
                email,
                name,
                password,
            } => {
                let password = password_or_prompt(password)?;
                let identity = self
                    .session
                    .sign_up(&email, &password, name.as_deref().unwrap_or(""))
                    .await?;
                Ok(json!({ "user": to_json(&identity)? }))
            }

            Commands::Signin { email, password } => {
                let password = password_or_prompt(password)?;
                let identity = self.session.sign_in(&email, &password).await?;
                Ok(json!({ "user": to_json(&identity)? }))
            }

            Commands::Signout { yes } => {
                let confirmation = if yes { always } else { confirmation };
                if !confirmation.confirm(SIGN_OUT_PROMPT) {
                    return Ok(json!({ "signed_out": false }));
                }
                self.session.sign_out()?;
                Ok(json!({ "signed_out": true }))
            }

            Commands::Whoami => {
                let identity = self.session.current_identity().await;
                Ok(json!({ "user": to_json(&identity)? }))
            }

            Commands::List { search, newest } => {
                let order = if newest {
                    ListOrder::NewestFirst
                } else {
                    ListOrder::Store
                };
                self.list = RecipeListController::new(self.recipes.clone()).with_order(order);
                self.list.refresh(&self.session).await?;
                render_list(self.list.apply_filter(search.as_deref().unwrap_or("")))
            }

            Commands::Show { id } => {
                let id = parse_id(&id)?;
                self.list.refresh(&self.session).await?;
                let recipe = self
                    .list
                    .find(id)
                    .cloned()
                    .ok_or_else(|| CoreError::not_found(format!("Recipe {id}")))?;
                let renderable = RenderableRecipe::new(recipe, self.list.viewer());
                Ok(json!({ "recipe": render_recipe(&renderable)? }))
            }

            Commands::Add {
                title,
                ingredients,
                steps,
                image,
            } => {
                let draft = RecipeDraft {
                    title,
                    ingredients: ingredients.join("\n"),
                    steps,
                    image,
                };
                let recipe = self
                    .form
                    .submit(&self.session, &mut self.list, draft, None)
                    .await?;
                Ok(json!({ "recipe": to_json(&recipe)? }))
            }

            Commands::Edit {
                id,
                title,
                ingredients,
                steps,
                image,
                clear_image,
            } => {
                let id = parse_id(&id)?;
                self.list.refresh(&self.session).await?;
                let current = self
                    .list
                    .find(id)
                    .ok_or_else(|| CoreError::not_found(format!("Recipe {id}")))?;

                let mut draft = RecipeDraft::from_recipe(current);
                if let Some(title) = title {
                    draft.title = title;
                }
                if !ingredients.is_empty() {
                    draft.ingredients = ingredients.join("\n");
                }
                if let Some(steps) = steps {
                    draft.steps = steps;
                }
                if clear_image {
                    draft.image = None;
                } else if image.is_some() {
                    draft.image = image;
                }

                let recipe = self
                    .form
                    .submit(&self.session, &mut self.list, draft, Some(id))
                    .await?;
                Ok(json!({ "recipe": to_json(&recipe)? }))
            }

            Commands::Delete { id, yes } => {
                let id = parse_id(&id)?;
                let confirmation = if yes { always } else { confirmation };
                let outcome = self
                    .form
                    .delete(&self.session, &mut self.list, id, confirmation)
                    .await?;
                Ok(json!({
                    "id": id.to_string(),
                    "deleted": outcome == DeleteOutcome::Deleted,
                }))
            }
        }
    }
}

fn render_list(view: ListView) -> CoreErrorResult<Value> {
    match view {
        ListView::Empty => Ok(json!({ "state": "empty", "message": EMPTY_LIST_MESSAGE })),
        ListView::Recipes(items) => {
            let recipes = items
                .iter()
                .map(render_recipe)
                .collect::<CoreErrorResult<Vec<Value>>>()?;
            Ok(json!({ "state": "recipes", "recipes": recipes }))
        }
    }
}

fn render_recipe(item: &RenderableRecipe) -> CoreErrorResult<Value> {
    let mut value = to_json(item)?;
    value["ingredients_preview"] = Value::String(item.ingredients_preview());
    Ok(value)
}

#[track_caller]
fn to_json<T: Serialize>(value: &T) -> CoreErrorResult<Value> {
    serde_json::to_value(value).map_err(|e| CoreError::store_unavailable(e.to_string()))
}

#[track_caller]
fn parse_id(raw: &str) -> CoreErrorResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| CoreError::invalid_input("id", format!("'{raw}' is not a recipe id.")))
}

fn password_or_prompt(password: Option<String>) -> CoreErrorResult<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt_line("Password")
            .map_err(|_| CoreError::invalid_input("password", "Password is required.")),
    }
}

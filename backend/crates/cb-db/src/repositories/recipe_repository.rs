//! Recipe persistence.
//!
//! Ids are stored as TEXT and timestamps as Unix milliseconds. Ingredients
//! are a JSON array in a single TEXT column. Store order is insertion order
//! (`rowid`).

use crate::{DbError, OwnedMutation, Result as DbErrorResult};

use cb_core::{ListOrder, Recipe, RecipeFields};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str =
    "SELECT id, title, ingredients, steps, image, owner_id, created_at, updated_at FROM recipes";

pub struct RecipeRepository {
    pool: SqlitePool,
}

impl RecipeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self, order: ListOrder) -> DbErrorResult<Vec<Recipe>> {
        let order_by = match order {
            ListOrder::Store => "ORDER BY rowid ASC",
            ListOrder::NewestFirst => "ORDER BY created_at DESC, rowid ASC",
        };

        let rows = sqlx::query(&format!("{SELECT_COLUMNS} {order_by}"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(recipe_from_row).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Recipe>> {
        let mut conn = self.pool.acquire().await?;
        find_in(&mut conn, id).await
    }

    pub async fn create(&self, recipe: &Recipe) -> DbErrorResult<()> {
        let ingredients = encode_ingredients(&recipe.ingredients)?;

        sqlx::query(
            r#"
                INSERT INTO recipes (
                    id, title, ingredients, steps, image, owner_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(recipe.id.to_string())
        .bind(&recipe.title)
        .bind(ingredients)
        .bind(&recipe.steps)
        .bind(&recipe.image)
        .bind(recipe.owner_id.to_string())
        .bind(recipe.created_at.timestamp_millis())
        .bind(recipe.updated_at.map(|dt| dt.timestamp_millis()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Write only when `requester_id` owns the row.
    ///
    /// The owner check is part of the `UPDATE` itself, so the statement takes
    /// the write lock up front. The row is read again only to explain a miss.
    pub async fn update_owned(
        &self,
        id: Uuid,
        requester_id: Uuid,
        fields: RecipeFields,
    ) -> DbErrorResult<OwnedMutation<Recipe>> {
        let ingredients = encode_ingredients(&fields.ingredients)?;
        let updated_at = Utc::now().timestamp_millis();

        // Stepped to completion so the statement is reset and the write commits
        let rows = sqlx::query(
            r#"
                UPDATE recipes
                SET title = ?, ingredients = ?, steps = ?, image = ?, updated_at = ?
                WHERE id = ? AND owner_id = ?
                RETURNING id, title, ingredients, steps, image, owner_id, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(ingredients)
        .bind(&fields.steps)
        .bind(&fields.image)
        .bind(updated_at)
        .bind(id.to_string())
        .bind(requester_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        match rows.first() {
            Some(row) => Ok(OwnedMutation::Applied(recipe_from_row(row)?)),
            None => self.explain_miss(id).await,
        }
    }

    /// Delete only when `requester_id` owns the row.
    pub async fn delete_owned(
        &self,
        id: Uuid,
        requester_id: Uuid,
    ) -> DbErrorResult<OwnedMutation<()>> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(requester_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            Ok(OwnedMutation::Applied(()))
        } else {
            self.explain_miss(id).await
        }
    }

    /// Whether `requester_id` could mutate the row, without writing.
    pub async fn check_owner(
        &self,
        id: Uuid,
        requester_id: Uuid,
    ) -> DbErrorResult<OwnedMutation<()>> {
        let owner: Option<String> =
            sqlx::query_scalar("SELECT owner_id FROM recipes WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(match owner {
            None => OwnedMutation::Missing,
            Some(owner) if owner != requester_id.to_string() => OwnedMutation::NotOwner,
            Some(_) => OwnedMutation::Applied(()),
        })
    }

    async fn explain_miss<T>(&self, id: Uuid) -> DbErrorResult<OwnedMutation<T>> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM recipes WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(match exists {
            Some(_) => OwnedMutation::NotOwner,
            None => OwnedMutation::Missing,
        })
    }
}

async fn find_in(conn: &mut SqliteConnection, id: Uuid) -> DbErrorResult<Option<Recipe>> {
    let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
        .bind(id.to_string())
        .fetch_optional(conn)
        .await?;

    row.as_ref().map(recipe_from_row).transpose()
}

fn encode_ingredients(ingredients: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(ingredients)
        .map_err(|e| DbError::corrupt("recipes", format!("Cannot encode ingredients: {}", e)))
}

fn recipe_from_row(row: &SqliteRow) -> DbErrorResult<Recipe> {
    let id: String = row.try_get("id")?;
    let owner_id: String = row.try_get("owner_id")?;
    let ingredients: String = row.try_get("ingredients")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: Option<i64> = row.try_get("updated_at")?;

    Ok(Recipe {
        id: parse_uuid(&id, "recipes.id")?,
        title: row.try_get("title")?,
        ingredients: serde_json::from_str(&ingredients).map_err(|e| {
            DbError::corrupt("recipes", format!("Invalid JSON in recipes.ingredients: {}", e))
        })?,
        steps: row.try_get("steps")?,
        image: row.try_get("image")?,
        owner_id: parse_uuid(&owner_id, "recipes.owner_id")?,
        created_at: parse_millis(created_at, "recipes.created_at")?,
        updated_at: updated_at
            .map(|ms| parse_millis(ms, "recipes.updated_at"))
            .transpose()?,
    })
}

fn parse_uuid(raw: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| DbError::corrupt("recipes", format!("Invalid UUID in {}: {}", column, e)))
}

fn parse_millis(ms: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| DbError::corrupt("recipes", format!("Invalid timestamp in {}", column)))
}

use crate::{DbError, Result as DbErrorResult};

use cb_core::Identity;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// An identity together with its stored password hash
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub identity: Identity,
    pub password_hash: String,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A taken email surfaces as [`DbError::Duplicate`].
    pub async fn create(&self, identity: &Identity, password_hash: &str) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash, display_name, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(password_hash)
        .bind(&identity.display_name)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .as_ref()
            .map(user_from_row)
            .transpose()?
            .map(|record| record.identity))
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<UserRecord> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| DbError::corrupt("users", format!("Invalid UUID in users.id: {}", e)))?;

    Ok(UserRecord {
        identity: Identity {
            id,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
        },
        password_hash: row.try_get("password_hash")?,
    })
}

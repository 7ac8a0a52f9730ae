use cb_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    Corrupt {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Duplicate {what} {location}")]
    Duplicate {
        what: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn corrupt<S: Into<String>>(table: &'static str, message: S) -> Self {
        Self::Corrupt {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_unique_violation()
        {
            return Self::Duplicate {
                what: db_err.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Any storage failure reaches the client as an unavailable store.
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        CoreError::store_unavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

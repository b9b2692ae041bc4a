use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookbookError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(i64),

    #[error("User {user_id} may not modify recipe {recipe_id}")]
    PermissionDenied { recipe_id: i64, user_id: String },

    #[error("Timed out waiting for the database")]
    Timeout,

    #[error("Invalid recipe: {0}")]
    Validation(String),
}

/// Coarse classification of a [`CookbookError`] for callers that only need
/// to decide what to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Timeout,
    Invalid,
    Unknown,
}

impl CookbookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CookbookError::RecipeNotFound(_) => ErrorKind::NotFound,
            CookbookError::Database(sqlx::Error::RowNotFound) => ErrorKind::NotFound,
            CookbookError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            CookbookError::Timeout => ErrorKind::Timeout,
            CookbookError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::Timeout,
            CookbookError::Validation(_) => ErrorKind::Invalid,
            CookbookError::Database(_)
            | CookbookError::Migration(_)
            | CookbookError::Serialization(_)
            | CookbookError::Config(_) => ErrorKind::Unknown,
        }
    }
}

pub type Result<T> = std::result::Result<T, CookbookError>;

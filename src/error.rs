use thiserror::Error;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("a participant with this email is already registered")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl RegistrationError {
    /// Text shown in the error fragment. Never includes the underlying cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            RegistrationError::DuplicateEmail => DUPLICATE_EMAIL_MESSAGE,
            RegistrationError::Database(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl From<sqlx::Error> for RegistrationError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RegistrationError::DuplicateEmail
            }
            _ => RegistrationError::Database(err),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

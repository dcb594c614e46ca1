use axum::http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for user record writes.
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("email already registered")]
    EmailTaken,

    #[error("credential hashing failed")]
    Hash(#[source] anyhow::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl UserStoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserStoreError::MissingField(_) => StatusCode::BAD_REQUEST,
            UserStoreError::EmailTaken => StatusCode::CONFLICT,
            UserStoreError::Hash(_) | UserStoreError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Translates a Postgres unique-index violation on the email column
/// into the conflict variant; everything else stays a database error.
pub fn map_db_error(e: sqlx::Error) -> UserStoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23505") {
            return UserStoreError::EmailTaken;
        }
    }
    UserStoreError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            UserStoreError::MissingField("name").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(UserStoreError::EmailTaken.status(), StatusCode::CONFLICT);
        assert_eq!(
            UserStoreError::Hash(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = UserStoreError::MissingField("email");
        assert_eq!(err.to_string(), "missing required field: email");
    }
}

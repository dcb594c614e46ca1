use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::password;
use crate::error::UserStoreError;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub created_at: OffsetDateTime,
}

/// Credential state of an in-memory record. A value is `Plain` only
/// between construction and the pre-persistence hook; once hashed it
/// stays `Hashed`, so re-saving a record never hashes it twice.
#[derive(Debug, Clone)]
pub enum Credential {
    Plain(String),
    Hashed(String),
}

impl Credential {
    pub fn is_empty(&self) -> bool {
        match self {
            Credential::Plain(v) | Credential::Hashed(v) => v.is_empty(),
        }
    }

    /// The pre-persistence hashing hook. Resolves to the value that may
    /// be written to storage: plaintext goes through Argon2 on the
    /// blocking pool, an existing hash passes through untouched. On a
    /// hashing fault the write is aborted with the error.
    pub async fn into_stored(self) -> Result<String, UserStoreError> {
        match self {
            Credential::Hashed(hash) => Ok(hash),
            Credential::Plain(plain) => password::hash_blocking(plain)
                .await
                .map_err(UserStoreError::Hash),
        }
    }
}

/// A user as built by a caller before persistence.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub credential: Credential,
}

impl NewUser {
    /// Presence checks only; rejected before the hashing hook runs.
    pub fn validate(&self) -> Result<(), UserStoreError> {
        if self.name.trim().is_empty() {
            return Err(UserStoreError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(UserStoreError::MissingField("email"));
        }
        if self.credential.is_empty() {
            return Err(UserStoreError::MissingField("credential"));
        }
        Ok(())
    }
}

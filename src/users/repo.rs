use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{map_db_error, UserStoreError};
use crate::users::repo_types::{NewUser, User};

impl User {
    /// Persist a new user. Presence validation runs first, then the
    /// credential hashing hook; the insert only happens once the hook
    /// has resolved, so a plaintext credential never reaches storage.
    pub async fn create(db: &PgPool, new: NewUser) -> Result<User, UserStoreError> {
        new.validate()?;

        let NewUser {
            name,
            age,
            email,
            credential,
        } = new;

        let password_hash = credential.into_stored().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, age, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, age, email, password_hash, created_at
            "#,
        )
        .bind(&name)
        .bind(age)
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(map_db_error)?;

        Ok(user)
    }

    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, UserStoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, age, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, UserStoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, age, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}

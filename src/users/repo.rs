use sqlx::PgPool;
use uuid::Uuid;

use crate::users::repo_types::User;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, password_salt, password_hash, favorites, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, password_salt, password_hash, favorites, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user with derived credentials and empty favorites.
    /// A duplicate email violates the unique index and surfaces as a
    /// database error with SQLSTATE 23505.
    pub async fn create(
        db: &PgPool,
        firstname: &str,
        lastname: &str,
        email: &str,
        password_salt: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, password_salt, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, email, password_salt, password_hash, favorites, created_at
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(password_salt)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Append a track to the user's favorites unless already present.
    /// Returns false when no user row matched.
    pub async fn add_favorite(
        db: &PgPool,
        user_id: Uuid,
        track: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET favorites = CASE WHEN $2 = ANY(favorites) THEN favorites
                                 ELSE array_append(favorites, $2) END
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(track)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a track from the user's favorites. Removing a track that is
    /// not in the list is not an error. Returns false when no user row
    /// matched.
    pub async fn remove_favorite(
        db: &PgPool,
        user_id: Uuid,
        track: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET favorites = array_remove(favorites, $2)
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(track)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

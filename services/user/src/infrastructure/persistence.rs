//! PostgreSQL 用户 Repository 实现

use async_trait::async_trait;
use bento_common::UserId;
use bento_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    email: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId(self.id),
            username: self.username,
            password: self.password,
            email: self.email,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list users: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find user: {}", e)))?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn save(&self, user: &NewUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password, email)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, email
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save user: {}", e)))?;

        Ok(row.into_user())
    }
}

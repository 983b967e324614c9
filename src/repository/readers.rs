//! Readers repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reader::{Reader, ReaderFields},
};

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Postgres>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all readers
    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        let rows = sqlx::query_as::<_, Reader>("SELECT * FROM readers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get reader by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>("SELECT * FROM readers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(AppError::not_found)
    }

    /// Insert a validated reader with an already hashed password
    pub async fn create(&self, data: &ReaderFields, password_hash: &str) -> AppResult<Reader> {
        let row = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (email, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite a reader; the password hash is only replaced when given
    pub async fn update(
        &self,
        id: i32,
        data: &ReaderFields,
        password_hash: Option<&str>,
    ) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>(
            r#"
            UPDATE readers
            SET email = $1, name = $2, password_hash = COALESCE($3, password_hash), updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(password_hash)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(AppError::not_found)
    }

    /// Delete a reader
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM readers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found());
        }
        Ok(())
    }
}

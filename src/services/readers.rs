//! Reader account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        reader::{CreateReader, Reader, ReaderFields, UpdateReader, READER_FIELDS},
        validation_messages,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Reader>> {
        self.repository.readers.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        self.repository.readers.get_by_id(id).await
    }

    /// Create a reader, hashing the password before it is stored
    pub async fn create(&self, data: CreateReader) -> AppResult<Reader> {
        let (fields, password) = validate(data, &READER_FIELDS)?;
        let password = password
            .ok_or_else(|| AppError::Internal("Validated reader has no password".to_string()))?;
        let password_hash = hash_password(&password)?;

        let reader = self.repository.readers.create(&fields, &password_hash).await?;
        tracing::info!(reader_id = reader.id, "Reader created");
        Ok(reader)
    }

    /// Apply a partial update; a new password is re-hashed
    pub async fn update(&self, id: i32, data: &UpdateReader) -> AppResult<Reader> {
        let current = self.repository.readers.get_by_id(id).await?;
        let (fields, password) = validate(data.apply_to(&current), &data.checked_fields())?;
        let password_hash = password.as_deref().map(hash_password).transpose()?;

        let reader = self
            .repository
            .readers
            .update(id, &fields, password_hash.as_deref())
            .await?;
        tracing::info!(reader_id = id, password_changed = password_hash.is_some(), "Reader updated");
        Ok(reader)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.readers.delete(id).await?;
        tracing::info!(reader_id = id, "Reader deleted");
        Ok(())
    }
}

fn validate(data: CreateReader, fields: &[&str]) -> AppResult<(ReaderFields, Option<String>)> {
    if let Err(errors) = data.validate() {
        let messages = validation_messages(&errors, fields);
        if !messages.is_empty() {
            tracing::debug!(?messages, "Reader rejected");
            return Err(AppError::Validation(messages));
        }
    }

    data.into_parts()
        .ok_or_else(|| AppError::Internal("Validated reader is missing a field".to_string()))
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

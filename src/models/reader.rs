//! Reader model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

/// Field order used when reporting validation messages
pub const READER_FIELDS: [&str; 3] = ["email", "name", "password"];

/// Reader account
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Reader {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Argon2 PHC string, never sent to clients
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create reader request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateReader {
    #[validate(
        required(message = "Please enter your email address."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Please enter your name."),
        custom(function = "not_blank", message = "Your name cannot be empty")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Please enter a password."),
        length(
            min = 8,
            max = 50,
            message = "Password must be between 8 and 50 characters in length."
        )
    )]
    pub password: Option<String>,
}

/// Update reader request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateReader {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
}

impl UpdateReader {
    /// Merge the changes onto a stored reader.
    ///
    /// The stored password is a hash, so the merged request only carries a
    /// password when the update sets one.
    pub fn apply_to(&self, reader: &Reader) -> CreateReader {
        CreateReader {
            email: match &self.email {
                Some(value) => value.clone(),
                None => Some(reader.email.clone()),
            },
            name: match &self.name {
                Some(value) => value.clone(),
                None => Some(reader.name.clone()),
            },
            password: self.password.clone().flatten(),
        }
    }

    /// Fields whose rules apply to this update
    pub fn checked_fields(&self) -> Vec<&'static str> {
        READER_FIELDS
            .into_iter()
            .filter(|field| *field != "password" || self.password.is_some())
            .collect()
    }
}

/// Reader fields that passed validation, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderFields {
    pub email: String,
    pub name: String,
}

impl CreateReader {
    /// Split a validated request into the stored fields and the plain-text
    /// password, which the caller hashes.
    pub fn into_parts(self) -> Option<(ReaderFields, Option<String>)> {
        Some((
            ReaderFields {
                email: self.email?,
                name: self.name?,
            },
            self.password,
        ))
    }
}

//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

/// Field order used when reporting validation messages
pub const BOOK_FIELDS: [&str; 4] = ["title", "author", "genre", "isbn"];

/// Catalog record for a single book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
///
/// Every field is optional at the wire level so that a missing field is
/// reported through its presence rule instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(
        required(message = "Please enter a title."),
        custom(function = "not_blank", message = "The book title cannot be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Please enter an author."),
        custom(function = "not_blank", message = "The book author cannot be empty")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "Please enter a genre."),
        custom(function = "not_blank", message = "The book genre cannot be empty")
    )]
    pub genre: Option<String>,
    #[serde(rename = "ISBN")]
    #[validate(
        required(message = "Please enter the ISBN."),
        custom(function = "not_blank", message = "The book ISBN cannot be empty")
    )]
    pub isbn: Option<String>,
}

/// Update book request
///
/// Absent keys leave the stored value untouched; an explicit `null`
/// clears the value and fails the presence rule on re-validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub genre: Option<Option<String>>,
    #[serde(default, rename = "ISBN", with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub isbn: Option<Option<String>>,
}

impl UpdateBook {
    /// Merge the changes onto a stored book, producing the full field set
    /// that has to pass validation before the update is written.
    pub fn apply_to(&self, book: &Book) -> CreateBook {
        fn merge(change: &Option<Option<String>>, current: &str) -> Option<String> {
            match change {
                Some(value) => value.clone(),
                None => Some(current.to_string()),
            }
        }

        CreateBook {
            title: merge(&self.title, &book.title),
            author: merge(&self.author, &book.author),
            genre: merge(&self.genre, &book.genre),
            isbn: merge(&self.isbn, &book.isbn),
        }
    }
}

/// Book fields that passed validation, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
}

impl CreateBook {
    /// Consume a validated request. Returns `None` if a field is missing,
    /// which cannot happen once `validate()` succeeded.
    pub fn into_fields(self) -> Option<BookFields> {
        Some(BookFields {
            title: self.title?,
            author: self.author?,
            genre: self.genre?,
            isbn: self.isbn?,
        })
    }
}

//! Data models for the library server

pub mod book;
pub mod reader;

use validator::{ValidationError, ValidationErrors};

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use reader::{CreateReader, Reader, UpdateReader};

/// Flatten validation errors into their messages, ordered by `fields`.
///
/// Errors on fields not listed are dropped.
pub fn validation_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .flat_map(|field| {
            field_errors
                .iter()
                .filter(move |(name, _)| name.eq_ignore_ascii_case(field))
                .flat_map(|(name, errors)| {
                    errors.iter().map(move |error| match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("Invalid value for {}", name),
                    })
                })
        })
        .collect()
}

/// Reject strings made only of whitespace, including the empty string
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookFields, CreateBook, UpdateBook, BOOK_FIELDS},
        validation_messages,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let fields = validate(data)?;
        let book = self.repository.books.create(&fields).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    /// Apply a partial update, re-validating the merged record
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        let current = self.repository.books.get_by_id(id).await?;
        let fields = validate(data.apply_to(&current))?;
        let book = self.repository.books.update(id, &fields).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}

fn validate(data: CreateBook) -> AppResult<BookFields> {
    if let Err(errors) = data.validate() {
        let messages = validation_messages(&errors, &BOOK_FIELDS);
        tracing::debug!(?messages, "Book rejected");
        return Err(AppError::Validation(messages));
    }

    data.into_fields()
        .ok_or_else(|| AppError::Internal("Validated book is missing a field".to_string()))
}

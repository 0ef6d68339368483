//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, PatchBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Verify database connectivity, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(())
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book. Rejects when another book already has the same
    /// ISBN; the database unique constraint backs this check.
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        if self.repository.books.isbn_exists(&book.isbn, None).await? {
            return Err(AppError::Conflict(
                "Book with this ISBN already exists".to_string(),
            ));
        }

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Catalog create: book id={} isbn={}", created.id, created.isbn);
        Ok(created)
    }

    /// Replace all mutable fields of an existing book. When the ISBN
    /// changes, it must not collide with another book; keeping the book's
    /// own ISBN always succeeds.
    pub async fn replace_book(&self, id: i64, update: UpdateBook) -> AppResult<Book> {
        let existing = self.get_book(id).await?;

        if existing.isbn != update.isbn
            && self.repository.books.isbn_exists(&update.isbn, Some(id)).await?
        {
            return Err(AppError::Conflict(
                "Book with this ISBN already exists".to_string(),
            ));
        }

        let book = Book {
            title: update.title,
            author: update.author,
            isbn: update.isbn,
            publication_year: update.publication_year,
            available: update.available,
            ..existing
        };
        self.repository.books.update(&book).await
    }

    /// Partially update an existing book: only the fields present in the
    /// patch overwrite stored values. An ISBN change is checked for
    /// collisions before any field is applied.
    pub async fn patch_book(&self, id: i64, patch: PatchBook) -> AppResult<Book> {
        let mut book = self.get_book(id).await?;

        if let Some(ref isbn) = patch.isbn {
            if *isbn != book.isbn
                && self.repository.books.isbn_exists(isbn, Some(id)).await?
            {
                return Err(AppError::Conflict(
                    "Book with this ISBN already exists".to_string(),
                ));
            }
        }

        patch.apply(&mut book);
        self.repository.books.update(&book).await
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Catalog delete: book id={}", id);
        Ok(())
    }
}

//! Book (catalog entry) model and related request types.
//!
//! The wire representation uses camelCase field names (`publicationYear`);
//! the database uses snake_case columns of the same names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Full book record from the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Uniqueness key for the catalog
    pub isbn: String,
    pub publication_year: Option<i32>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request (full candidate record, no id)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(custom(function = "not_blank", message = "title must not be blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "author must not be blank"))]
    pub author: String,
    #[validate(custom(function = "not_blank", message = "isbn must not be blank"))]
    pub isbn: String,
    #[validate(range(min = 0, message = "publicationYear must be >= 0"))]
    pub publication_year: Option<i32>,
    /// Defaults to true when not supplied
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Replace book request (full candidate record for PUT)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(custom(function = "not_blank", message = "title must not be blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "author must not be blank"))]
    pub author: String,
    #[validate(custom(function = "not_blank", message = "isbn must not be blank"))]
    pub isbn: String,
    #[validate(range(min = 0, message = "publicationYear must be >= 0"))]
    pub publication_year: Option<i32>,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Partial update request (PATCH). Each field is independently
/// present-or-absent; an absent (or null) field leaves the stored value
/// unchanged. There is no way to clear a field back to null.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub publication_year: Option<i32>,
    pub available: Option<bool>,
}

impl PatchBook {
    /// Overwrite the stored values with every field present in the patch.
    pub fn apply(&self, book: &mut Book) {
        if let Some(ref title) = self.title {
            book.title = title.clone();
        }
        if let Some(ref author) = self.author {
            book.author = author.clone();
        }
        if let Some(ref isbn) = self.isbn {
            book.isbn = isbn.clone();
        }
        if let Some(year) = self.publication_year {
            book.publication_year = Some(year);
        }
        if let Some(available) = self.available {
            book.available = available;
        }
    }
}

fn default_available() -> bool {
    true
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

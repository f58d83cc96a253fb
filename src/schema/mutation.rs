use juniper::{FieldError, FieldResult, graphql_value};
use tracing::warn;

use super::objects::{author::Author, book::Book};
use crate::{
    state::AppData,
    store::{NewAuthor, NewBook, StoreError},
};

#[derive(Clone, Copy, Debug)]
pub struct Mutation;

/// Root Mutation
#[juniper::graphql_object(context = AppData)]
impl Mutation {
    /// Add Book
    async fn add_book(ctx: &AppData, title: String) -> FieldResult<Option<Book>> {
        let book = ctx
            .store
            .insert_book(NewBook::titled(title))
            .await
            .map_err(persistence_failure)?;
        Ok(Some(book.into()))
    }

    /// Add Author
    async fn add_author(ctx: &AppData, name: String) -> FieldResult<Option<Author>> {
        let author = ctx
            .store
            .insert_author(NewAuthor { name })
            .await
            .map_err(persistence_failure)?;
        Ok(Some(author.into()))
    }
}

// A failed write is reported as a field error carrying the store's message,
// leaving the field null.
fn persistence_failure(err: StoreError) -> FieldError {
    warn!(error = %err, "Write to document store failed");
    FieldError::new(err, graphql_value!({ "code": "PERSISTENCE_FAILURE" }))
}

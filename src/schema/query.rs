use juniper::FieldResult;

use super::objects::{author::Author, book::Book};
use crate::state::AppData;

#[derive(Clone, Copy, Debug)]
pub struct Query;

/// Root Query
#[juniper::graphql_object(context = AppData)]
impl Query {
    /// Single Book
    async fn book(ctx: &AppData, id: Option<String>) -> FieldResult<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let book = ctx.store.find_book_by_id(&id).await?;
        Ok(book.map(Book::from))
    }

    /// List of Books
    async fn books(ctx: &AppData) -> FieldResult<Vec<Book>> {
        let books = ctx
            .store
            .find_books()
            .await?
            .into_iter()
            .map(Book::from)
            .collect();
        Ok(books)
    }

    /// Single Author
    async fn author(ctx: &AppData, id: Option<String>) -> FieldResult<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let author = ctx.store.find_author_by_id(&id).await?;
        Ok(author.map(Author::from))
    }

    /// List of Authors
    async fn authors(ctx: &AppData) -> FieldResult<Vec<Author>> {
        let authors = ctx
            .store
            .find_authors()
            .await?
            .into_iter()
            .map(Author::from)
            .collect();
        Ok(authors)
    }
}

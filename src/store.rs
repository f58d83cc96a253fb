use chrono::Utc;
use entities::{authors, books};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryOrder, Schema,
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cast to UUID failed for value \"{0}\"")]
    MalformedId(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Fields a client supplies when adding a book. The identifier and insertion
/// timestamp are assigned by the store.
#[derive(Clone, Debug, Default)]
pub struct NewBook {
    pub title: String,
    pub author_id: Option<String>,
}

impl NewBook {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author_id: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewAuthor {
    pub name: String,
}

/// Handle to the `books` and `authors` collections.
///
/// Cloning is cheap; every clone shares the same connection pool. The handle is
/// built once at startup and closed after the server has drained.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub async fn connect(options: impl Into<ConnectOptions>) -> StoreResult<Self> {
        let db = Database::connect(options).await?;
        info!(backend = ?db.get_database_backend(), "Connected to document store");
        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Creates the collections that do not exist yet. Existing ones are left
    /// untouched.
    pub async fn sync_collections(&self) -> StoreResult<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut books = schema.create_table_from_entity(books::Entity);
        books.if_not_exists();
        self.db.execute(backend.build(&books)).await?;

        let mut authors = schema.create_table_from_entity(authors::Entity);
        authors.if_not_exists();
        self.db.execute(backend.build(&authors)).await?;

        info!("Collections ready");
        Ok(())
    }

    pub async fn close(self) -> StoreResult<()> {
        self.db.close().await?;
        info!("Document store connection closed");
        Ok(())
    }

    pub async fn find_books(&self) -> StoreResult<Vec<books::Model>> {
        debug!(collection = "books", "find");
        let books = books::Entity::find()
            .order_by_asc(books::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(books)
    }

    pub async fn find_book_by_id(&self, id: &str) -> StoreResult<Option<books::Model>> {
        let id = parse_id(id)?;
        debug!(collection = "books", %id, "find by id");
        let book = books::Entity::find_by_id(id).one(&self.db).await?;
        Ok(book)
    }

    pub async fn insert_book(&self, book: NewBook) -> StoreResult<books::Model> {
        let id = Uuid::new_v4();
        debug!(collection = "books", %id, "insert");
        let book = books::ActiveModel {
            id: Set(id),
            title: Set(book.title),
            author_id: Set(book.author_id),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(&self.db)
        .await?;
        Ok(book)
    }

    pub async fn find_authors(&self) -> StoreResult<Vec<authors::Model>> {
        debug!(collection = "authors", "find");
        let authors = authors::Entity::find()
            .order_by_asc(authors::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(authors)
    }

    pub async fn find_author_by_id(&self, id: &str) -> StoreResult<Option<authors::Model>> {
        let id = parse_id(id)?;
        debug!(collection = "authors", %id, "find by id");
        let author = authors::Entity::find_by_id(id).one(&self.db).await?;
        Ok(author)
    }

    pub async fn insert_author(&self, author: NewAuthor) -> StoreResult<authors::Model> {
        let id = Uuid::new_v4();
        debug!(collection = "authors", %id, "insert");
        let author = authors::ActiveModel {
            id: Set(id),
            name: Set(author.name),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(&self.db)
        .await?;
        Ok(author)
    }
}

fn parse_id(id: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

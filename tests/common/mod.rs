#![allow(dead_code)]

use juniper::http::GraphQLRequest;
use library_graphql::{
    schema::{self, Schema},
    state::AppData,
    store::Store,
};
use sea_orm::{ConnectOptions, ConnectionTrait};
use serde_json::Value;

/// Store backed by a private in-memory SQLite database.
pub async fn memory_store() -> Store {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would otherwise see its own empty database.
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let store = Store::connect(options)
        .await
        .expect("failed to open in-memory store");
    store
        .sync_collections()
        .await
        .expect("failed to create collections");
    store
}

/// Makes every insert into `collection` abort with `message`.
pub async fn reject_inserts(store: &Store, collection: &str, message: &str) {
    store
        .connection()
        .execute_unprepared(&format!(
            "CREATE TRIGGER reject_{collection} BEFORE INSERT ON {collection} \
             BEGIN SELECT RAISE(ABORT, '{message}'); END;"
        ))
        .await
        .expect("failed to install trigger");
}

pub struct TestApp {
    pub schema: Schema<'static>,
    pub ctx: AppData,
}

impl TestApp {
    pub async fn new() -> Self {
        Self {
            schema: schema::schema(),
            ctx: AppData::new(memory_store().await),
        }
    }

    pub async fn run(&self, query: &str) -> Value {
        let request = GraphQLRequest::new(query.to_string(), None, None);
        let response = request.execute(&self.schema, &self.ctx).await;
        serde_json::to_value(&response).expect("response is serializable")
    }

    pub async fn add_book(&self, title: &str) -> String {
        let body = self
            .run(&format!("mutation {{ addBook(title: {title:?}) {{ id title }} }}"))
            .await;
        assert_eq!(body["data"]["addBook"]["title"], title, "{body}");
        body["data"]["addBook"]["id"]
            .as_str()
            .expect("generated id")
            .to_string()
    }
}

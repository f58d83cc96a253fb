pub mod config;
pub mod schema;
pub mod server;
pub mod setup;
pub mod state;
pub mod store;

use juniper::{EmptySubscription, RootNode};

use crate::state::AppData;

pub mod mutation;
pub mod objects;
pub mod query;

pub type Schema<'a> = RootNode<'a, query::Query, mutation::Mutation, EmptySubscription<AppData>>;

pub fn schema() -> Schema<'static> {
    Schema::new(query::Query, mutation::Mutation, EmptySubscription::new())
}

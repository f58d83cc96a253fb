use juniper::GraphQLObject;

/// Book Structure
#[derive(Clone, Debug, GraphQLObject)]
pub struct Book {
    pub id: String,
    pub title: String,
}

impl From<entities::books::Model> for Book {
    fn from(model: entities::books::Model) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
        }
    }
}

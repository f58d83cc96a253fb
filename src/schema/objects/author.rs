use juniper::GraphQLObject;

/// Author Structure
#[derive(Clone, Debug, GraphQLObject)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl From<entities::authors::Model> for Author {
    fn from(model: entities::authors::Model) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name,
        }
    }
}

use anyhow::Context;

use crate::{config::Config, store::Store};

pub struct SetupResult {
    pub store: Store,
}

pub async fn setup_all(config: &Config) -> anyhow::Result<SetupResult> {
    let store = Store::connect(config.database_url.as_str())
        .await
        .context("failed to connect to document store")?;
    store
        .sync_collections()
        .await
        .context("failed to prepare collections")?;
    Ok(SetupResult { store })
}

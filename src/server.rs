use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, State},
    routing::{MethodFilter, get, on},
};
use juniper_axum::{extract::JuniperRequest, graphiql, playground, response::JuniperResponse};
use tokio::signal;
use tracing::info;

use crate::{
    schema::{self, Schema},
    state::{AppData, AppState},
    store::Store,
};

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<Arc<Schema<'static>>>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse(request.execute(&schema, &*state).await)
}

pub fn router(store: Store) -> Router {
    let app_state = AppState::new(AppData::new(store));

    Router::new()
        .route(
            GRAPHQL_PATH,
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .route("/graphiql", get(graphiql(GRAPHQL_PATH, None)))
        .route("/playground", get(playground(GRAPHQL_PATH, None)))
        .with_state(app_state)
        .layer(Extension(Arc::new(schema::schema())))
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

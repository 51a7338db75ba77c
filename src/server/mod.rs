use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{db, Result};

pub mod render;
pub mod routes;

/// Server state. Only the store path is shared; every request opens and
/// drops its own connection.
pub struct AppState {
    pub db_path: PathBuf,
}

pub fn router(db_path: PathBuf) -> Router {
    let state = Arc::new(AppState { db_path });

    Router::new()
        .route("/", get(routes::index))
        .route("/api/entries", get(routes::api_entries))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(bind: &str, db_path: PathBuf) -> Result<()> {
    match db::open_existing(&db_path).and_then(|conn| db::count_entries(&conn)) {
        Ok(count) => info!("Store {} holds {} entries", db_path.display(), count),
        Err(e) => warn!(
            "Store {} unavailable ({}); requests fail until the loader runs",
            db_path.display(),
            e
        ),
    }
    let app = router(db_path);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let addr = listener.local_addr()?;
    info!("Starting server on {}", addr);
    println!("Serving entries at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

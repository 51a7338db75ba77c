use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Serialize;
use tracing::warn;

use crate::db::{self, Entry};
use crate::server::{render, AppState};
use crate::{Error, Result};

pub const MISSING_DB_TEXT: &str = "Database not found. Run the CSV->SQLite converter first.";
pub const MISSING_DB_JSON: &str = "DB not found";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Open a connection for this request only; it is closed when this returns,
/// whether the query succeeded or not.
fn load_entries(state: &AppState) -> Result<Vec<Entry>> {
    let conn = db::open_existing(&state.db_path)?;
    db::fetch_entries(&conn)
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, (StatusCode, String)> {
    match load_entries(&state) {
        Ok(entries) => Ok(Html(render::entries_page(&entries))),
        Err(Error::MissingStore(_)) => {
            Err((StatusCode::INTERNAL_SERVER_ERROR, MISSING_DB_TEXT.to_string()))
        }
        Err(e) => {
            warn!("Listing entries failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

pub async fn api_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Entry>>, (StatusCode, Json<ErrorResponse>)> {
    let error = |message: String| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: message }));

    match load_entries(&state) {
        Ok(entries) => Ok(Json(entries)),
        Err(Error::MissingStore(_)) => Err(error(MISSING_DB_JSON.to_string())),
        Err(e) => {
            warn!("Fetching entries failed: {}", e);
            Err(error(e.to_string()))
        }
    }
}

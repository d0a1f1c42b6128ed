//! JSON API consumed by the browser client.
//!
//! Routes mirror what the single-page client expects: the note list at
//! `GET /api`, creation and full-record update at `/api/notes`, removal at
//! `/api/notes/delete` with an id in the body. Not-found maps to 404, a
//! failed durable write to 500.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::error::Result;
use crate::note::{Note, NoteDraft};
use crate::storage::NoteStore;

/// Shared server state. The mutex serializes mutations, so one request's
/// write fully lands before the next begins.
pub struct AppState {
    pub store: Mutex<NoteStore>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: u64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(list_notes))
        .route("/api/notes", post(create_note).put(update_note))
        .route("/api/notes/delete", delete(delete_note))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is killed.
pub async fn serve(store: NoteStore, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(file = %store.path().display(), "serving notes API on http://{}", addr);

    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn list_notes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Note>> {
    let store = state.store.lock().await;
    let notes = store
        .list()
        .iter()
        .filter(|n| n.matches(query.tag.as_deref(), query.search.as_deref()))
        .cloned()
        .collect();
    Json(notes)
}

async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NoteDraft>,
) -> Response {
    let mut store = state.store.lock().await;
    match store.create(draft) {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to persist created note");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn update_note(State(state): State<Arc<AppState>>, Json(note): Json<Note>) -> Response {
    let mut store = state.store.lock().await;
    match store.update(note) {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to persist updated note");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn delete_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteRequest>,
) -> Response {
    let mut store = state.store.lock().await;
    match store.delete(req.id) {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Note not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to persist note deletion");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::movie_id;
use crate::{error::AppError, models::Movie, AppState};

pub const BANNERS: [&str; 2] = ["images/loki.webp", "images/interstellar.jpg"];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/movie/{id}", get(movie_details))
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub movies: Vec<Movie>,
    pub banners: Vec<&'static str>,
}

// GET /
async fn index(State(state): State<Arc<AppState>>) -> Result<Json<IndexResponse>, AppError> {
    let movies = state.ledger.list_movies().await?;
    Ok(Json(IndexResponse { movies, banners: BANNERS.to_vec() }))
}

// GET /movie/{id}
async fn movie_details(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, AppError> {
    let id = movie_id(path)?;
    state
        .ledger
        .find_movie(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Movie {id} not found")))
}

pub mod bookings;
pub mod movies;

use axum::{
    extract::{rejection::PathRejection, Path},
    Router,
};
use std::sync::Arc;

use crate::error::AppError;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(movies::routes())
        .merge(bookings::routes())
}

// Ids that are not integers never name a movie, so they are reported as missing
fn movie_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Unroutable movie id: {}", rejection.body_text());
        AppError::NotFound("Movie not found".to_string())
    })
}

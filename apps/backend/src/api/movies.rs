//! Movies API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::models::Movie;
use crate::AppState;

/// GET /movies/:id
///
/// Looks up a single movie by id.
///
/// Ids are positive by construction, so anything at or below zero is rejected
/// before the catalog is consulted.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<Movie>> {
    if movie_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "Invalid movie id: {}",
            movie_id
        )));
    }

    let movie = state
        .catalog()
        .find(movie_id)
        .await
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    tracing::debug!(movie_id = movie.id, title = %movie.title, "Movie looked up");

    Ok(Json(movie))
}

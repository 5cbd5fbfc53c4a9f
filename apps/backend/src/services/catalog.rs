//! Movie lookup service and the in-memory catalog backing the binary.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::Movie;

/// Trait for resolving a movie id to a record.
///
/// Implementations own creation and mutation of the records; the HTTP layer
/// only ever reads through this interface. Injected into [`crate::AppState`]
/// as `Arc<dyn MovieLookup>` so tests can substitute a scripted stub.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Resolve `id` to a movie, or `None` when no such record exists.
    async fn find(&self, id: i64) -> Option<Movie>;
}

/// In-memory movie catalog.
pub struct MemoryCatalog {
    movies: HashMap<i64, Movie>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
        }
    }

    /// Create a catalog pre-populated with the given movies.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: movies.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    /// Load a catalog from a JSON seed file containing an array of movies.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!("Failed to read seed file {:?}: {}", path, e))
        })?;

        let movies: Vec<Movie> = serde_json::from_str(&contents).map_err(|e| {
            AppError::Internal(format!("Failed to parse seed file {:?}: {}", path, e))
        })?;

        Ok(Self::with_movies(movies))
    }

    /// Create a catalog wrapped in Arc for shared access.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Insert a movie, replacing any existing record with the same id.
    pub fn insert(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog has no movies.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieLookup for MemoryCatalog {
    async fn find(&self, id: i64) -> Option<Movie> {
        self.movies.get(&id).cloned()
    }
}

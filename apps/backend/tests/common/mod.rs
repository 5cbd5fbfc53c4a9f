//! Test infrastructure for Marquee backend integration tests.
//!
//! Provides a `TestApp` wrapper around `axum_test::TestServer` with a
//! scripted catalog stub standing in for the real movie lookup service.

use axum::{routing::get, Router};
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use backend::config::{CatalogConfig, Config, ServerConfig};
use backend::models::Movie;
use backend::services::MovieLookup;
use backend::AppState;

/// Scripted stand-in for the movie lookup service.
///
/// Returns preset movies per id and records every `find` call, so tests can
/// assert both what was returned and whether the service was consulted at all.
pub struct StubCatalog {
    movies: Mutex<HashMap<i64, Movie>>,
    calls: Mutex<Vec<i64>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self {
            movies: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script a movie to be returned for its id.
    pub fn script(&self, movie: Movie) {
        self.movies.lock().unwrap().insert(movie.id, movie);
    }

    /// Ids `find` has been called with, in order.
    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieLookup for StubCatalog {
    async fn find(&self, id: i64) -> Option<Movie> {
        self.calls.lock().unwrap().push(id);
        self.movies.lock().unwrap().get(&id).cloned()
    }
}

/// Test application wrapper around axum_test::TestServer.
pub struct TestApp {
    server: TestServer,
    catalog: Arc<StubCatalog>,
}

impl TestApp {
    /// Create a new test application backed by an empty `StubCatalog`.
    ///
    /// The router mirrors the one built in main.rs so integration tests run
    /// against the actual production routes.
    ///
    /// Note: Path parameters use `:id` syntax instead of `{id}` for
    /// compatibility with axum-test. Both syntaxes are valid in Axum 0.7, but
    /// axum-test requires the colon syntax for proper route matching in test
    /// environments.
    pub fn new() -> Self {
        let catalog = Arc::new(StubCatalog::new());

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            catalog: CatalogConfig::default(),
        };

        let state = AppState {
            config: Arc::new(config),
            catalog: Arc::clone(&catalog) as Arc<dyn MovieLookup>,
        };

        let movies_routes = Router::new().route("/:id", get(backend::api::movies::get_movie));

        let app = Router::new()
            .route("/health", get(backend::health_check))
            .nest("/movies", movies_routes)
            .with_state(state);

        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, catalog }
    }

    /// Get a reference to the test server.
    ///
    /// Use this to make HTTP requests:
    /// ```ignore
    /// let response = app.server().get("/health").await;
    /// ```
    pub fn server(&self) -> &TestServer {
        &self.server
    }

    /// Get a reference to the scripted catalog stub.
    pub fn catalog(&self) -> &StubCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_creation() {
        let app = TestApp::new();
        assert!(app.catalog().calls().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let app = TestApp::new();
        let response = app.server().get("/health").await;

        response.assert_status_ok();
        response.assert_json_contains(&serde_json::json!({
            "message": "Marquee Backend is running"
        }));
    }

    #[tokio::test]
    async fn test_stub_records_calls_in_order() {
        let stub = StubCatalog::new();
        stub.script(Movie::new(1, "Metropolis", ""));

        assert!(stub.find(1).await.is_some());
        assert!(stub.find(7).await.is_none());
        assert_eq!(stub.calls(), vec![1, 7]);
    }
}

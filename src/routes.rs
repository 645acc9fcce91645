use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers::{books, comics, errors};

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search-books", get(books::search_books))
        .route("/add-book", post(books::add_book))
        .route("/top-comics", get(comics::top_comics))
        .route("/search-comics", get(comics::search_comics))
        .route("/add-comic", post(comics::add_comic))
}

/// Every route is served at the root and again under `/api`, the prefix the
/// UI's dev server forwards.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(errors::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

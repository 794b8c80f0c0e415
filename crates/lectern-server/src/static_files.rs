//! Static file serving.
//!
//! Fallback route serving files from the configured public directory
//! (stylesheets, images). Anything that is neither a page route nor an
//! existing file gets the HTML 404 page, so this doubles as the catch-all
//! not-found handler.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;
use crate::templates;

/// Create router for static file serving with an HTML 404 fallback.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve a static asset from the public directory.
async fn serve_asset(State(state): State<Arc<AppState>>, req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    // Reject empty and traversal paths outright
    if path.is_empty() || path.split('/').any(|segment| segment == "..") {
        return not_found();
    }

    let file_path = state.public_dir.join(path);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.to_string())
                .body(Body::from(content))
                .unwrap()
        }
        Err(_) => not_found(),
    }
}

/// The HTML 404 response.
fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
}

//! Front page handler.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;
use crate::templates;

/// Handle GET /.
pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::index_page(&state.site_title))
}

//! Video listing and detail handlers.
//!
//! The detail handler compiles the video's content blocks to HTML, embeds
//! them in the page template, and serves the result with an `ETag` so
//! unchanged pages answer conditional requests with 304.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use lectern_content::{ContentItem, compile};
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::state::AppState;
use crate::templates;

/// Handle GET /videos.
pub(crate) async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let catalog = state.catalog().await?;
    Ok(Html(templates::video_list_page(&state.site_title, &catalog.videos)))
}

/// Handle GET /videos/{slug}.
pub(crate) async fn detail(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let catalog = state.catalog().await?;
    let video = catalog
        .find(&slug)
        .ok_or_else(|| ServerError::VideoNotFound(slug.clone()))?;

    // Surface unrecognized block types in verbose mode; they still render
    // as fallback blocks
    if state.verbose {
        for entry in &video.content {
            if let ContentItem::Unknown { kind } = entry {
                tracing::warn!(slug = %slug, kind = %kind, "Unknown content block type");
            }
        }
    }

    let content = compile(&video.content);
    let page = templates::video_page(&state.site_title, video, &content);

    let etag = compute_etag(&state.version, &page);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_string()),
        ],
        Html(page),
    )
        .into_response())
}

/// Compute the `ETag` for a rendered detail page.
///
/// Hashes the application version together with the page body, so both a
/// deploy and a catalog edit invalidate cached copies. Truncated MD5
/// (16 hex chars) is plenty for cache validation.
fn compute_etag(version: &str, page: &str) -> String {
    let digest = Md5::digest(format!("{version}:{page}").as_bytes());
    format!("\"{}\"", &hex::encode(digest)[..16])
}

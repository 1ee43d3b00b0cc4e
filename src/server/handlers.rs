//! Request handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

use super::AppState;
use crate::error::ResolveError;
use crate::helpers::blog_index_url;

/// Redirect the site root to the blog index
pub async fn home(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&blog_index_url(state.config()))
}

/// Handler for the blog index page.
pub async fn blog_index(State(state): State<AppState>) -> Response {
    match state.renderer().render_index(state.content()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failed("blog index", e),
    }
}

/// Handler for individual blog posts.
pub async fn blog_post(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Response {
    // A segment that does not decode to a UTF-8 slug cannot name any post
    let Path(slug) = match slug {
        Ok(slug) => slug,
        Err(rejection) => {
            tracing::debug!("Unusable slug in {}: {}", uri.path(), rejection);
            return not_found_page(&state, uri.path());
        }
    };

    let post = match state.content().resolve(&slug) {
        Ok(post) => post,
        Err(ResolveError::NotFound { slug }) => {
            tracing::debug!("No post for slug {:?}", slug);
            return not_found_page(&state, uri.path());
        }
    };

    match state.renderer().render_post(&slug, post) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failed(&slug, e),
    }
}

/// Fallback for every unrouted path
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    not_found_page(&state, uri.path())
}

fn not_found_page(state: &AppState, path: &str) -> Response {
    match state.renderer().render_not_found(path) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render not-found page: {:#}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

fn render_failed(what: &str, e: anyhow::Error) -> Response {
    tracing::error!("Failed to render {}: {:#}", what, e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}

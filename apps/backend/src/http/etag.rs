//! ETags for game resources.
//!
//! The game's `version` column changes on every committed mutation, so
//! `"game-{id}-v{version}"` identifies one representation of a game.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

/// Generate an ETag for a game resource.
///
/// Format: `"game-{id}-v{version}"` (with quotes, as required by HTTP spec)
///
/// # Example
/// ```
/// # use backend::http::etag::game_etag;
/// let etag = game_etag(123, 5);
/// assert_eq!(etag, r#""game-123-v5""#);
/// ```
pub fn game_etag(id: i64, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}

/// Whether an `If-None-Match` value names `etag` (or is the `*` wildcard).
pub fn none_match_hits(header: &str, etag: &str) -> bool {
    let header = header.trim();
    header == "*"
        || header
            .split(',')
            .map(str::trim)
            .map(|tag| tag.strip_prefix("W/").unwrap_or(tag))
            .any(|tag| tag == etag)
}

/// `304 Not Modified` when the request already holds this representation.
pub fn not_modified(req: &HttpRequest, etag: &str) -> Option<HttpResponse> {
    let header = req.headers().get(IF_NONE_MATCH)?.to_str().ok()?;
    none_match_hits(header, etag).then(|| {
        HttpResponse::build(StatusCode::NOT_MODIFIED)
            .insert_header((ETAG, etag.to_owned()))
            .finish()
    })
}

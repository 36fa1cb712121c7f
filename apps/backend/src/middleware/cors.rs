use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::REQUEST_ID_HEADER;

/// CORS for the browser client: explicit origins, only the methods the API
/// serves, and the headers needed for ETag caching.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::IF_NONE_MATCH,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::ETAG,
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

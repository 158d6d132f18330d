use actix_web::{error::JsonPayloadError, web};

use crate::errors::ServerError;

pub mod note;

/// Largest JSON body accepted on `/notes`.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Mounts the `/notes` API.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .app_data(json_config())
            .app_data(path_config())
            .route("", web::get().to(note::list))
            .route("", web::post().to(note::new))
            .route("/{id}", web::delete().to(note::del))
            .route("/{id}", web::put().to(note::update)),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            log::debug!("rejected request body: {}", err);
            body_error(&err).into()
        })
}

// Handlers take the id before the body, so a bad id is reported even when
// the body is bad too.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("rejected note id: {}", err);
        ServerError::InvalidId.into()
    })
}

fn body_error(err: &JsonPayloadError) -> ServerError {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            ServerError::PayloadTooLarge
        }
        JsonPayloadError::ContentType => ServerError::UnsupportedMediaType,
        _ => ServerError::InvalidBody,
    }
}

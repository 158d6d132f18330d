//! Note-taking web service: a small JSON CRUD API over a single collection of
//! notes, plus the static page that drives it.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;

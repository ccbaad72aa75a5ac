//! HTTP gateway over the OMDb API.
//!
//! Serves movie, series, season and episode details plus genre top lists and
//! genre/director/actor recommendations computed against a fixed pool of
//! candidate titles.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

//! Farm-to-market marketplace.
//!
//! The library carries both sides of the application:
//!
//! - the REST backend: configuration, persistence, the authentication/
//!   authorization gate, route handlers, and the OpenAPI description;
//! - the client core ([`client`]): the persisted session store, the
//!   in-memory cart and favorites containers, and a thin HTTP API client.

pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validators;

//! # HTTP Server Module
//!
//! Request-handling layer over the record store. Decodes payloads, runs
//! them through the validation gate, calls the store and maps every outcome
//! to a status code.
//!
//! # Endpoints
//!
//! - `GET /healthz` - Liveness check
//! - `GET /info` - Service name and instance id
//! - `GET|POST|PUT /data` - List or create records
//! - `GET|PATCH|DELETE /data/:id` - Read, update or delete one record

pub mod config;
pub mod errors;
pub mod info_routes;
pub mod record_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse, SUBMISSION_HINT};
pub use server::HttpServer;

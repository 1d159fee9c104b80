//! data-api - A small keyed-record store served over HTTP
//!
//! Records are `{ID, Message}` pairs held in memory for the life of the
//! process. The [`record`] module is the core; everything else is the
//! service around it.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod record;
pub mod service;

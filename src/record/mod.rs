//! # Record Store
//!
//! The keyed-record core of the service.
//!
//! - [`Record`]: the stored value, keyed by `ID`
//! - [`ValidationGate`]: decodes and checks candidates before they reach the store
//! - [`RecordStore`]: the authoritative, lock-protected collection
//!
//! Neither the gate nor the store logs or formats user-facing text. Every
//! failure is a [`RecordError`] that the caller maps to its own surface.

mod errors;
mod model;
mod store;
mod validate;

pub use errors::{RecordError, RecordResult};
pub use model::{Record, RecordField};
pub use store::RecordStore;
pub use validate::ValidationGate;

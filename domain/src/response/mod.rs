//! Responses — the answers a user has supplied, keyed by question id.
//!
//! - [`value::ResponseValue`] — one answer, shaped by the question's kind
//! - [`store::ResponseStore`] — the session's id → value map

pub mod store;
pub mod value;

pub use store::ResponseStore;
pub use value::ResponseValue;

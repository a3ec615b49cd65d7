//! Error handling.
//!
//! Errors are recovered as close to their source as possible: the DNS
//! resolvers fall back to the next provider internally, and the orchestrator
//! converts any per-domain failure into result data. The only errors that
//! reach the caller of a batch search are carried in the `error` field of
//! individual results.

mod types;

pub use types::{InitializationError, LookupError};

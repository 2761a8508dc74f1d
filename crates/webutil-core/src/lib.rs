//! # webutil-core
//!
//! Stateless helper utilities for client application code: URL
//! query-string assembly and parsing, structured-record field projection,
//! fixed-point decimal arithmetic, and token-based date formatting.
//!
//! All operations are synchronous pure functions; nothing here performs
//! I/O or keeps state across calls, so the helpers may be used from any
//! thread without coordination.
//!
//! ## Modules
//!
//! - [`error`] - Structured diagnostic errors with a closed [`ErrorKind`]
//! - [`query`] - URL query builder and readers
//! - [`record`] - Presence checks and field projection over JSON records
//! - [`fixed`] - Fixed-point decimal arithmetic
//! - [`datetime`] - Token-based date formatting

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod datetime;
pub mod error;
pub mod fixed;
pub mod query;
pub mod record;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use query::{QueryParams, QueryString};
pub use record::Record;

//! Core handler infrastructure.
//!
//! This module contains the handler and host traits, the in-process registry,
//! and the reply middleware.

pub mod middleware;
pub mod registry;
pub mod traits;

pub use middleware::ReplySink;
pub use registry::{RegisterError, Registry};
pub use traits::{CommandHost, Handler};

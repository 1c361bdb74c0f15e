//! Shared types for the Studio platform
//!
//! Domain models and payload types used by the server and (via the API)
//! by the management console. DB row types are feature-gated behind `db`.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

//! Data models
//!
//! Shared between studio-cloud and the management console (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), all times epoch millis.

pub mod booking;
pub mod client;
pub mod company;
pub mod inventory;
pub mod product;
pub mod professional;
pub mod sales;
pub mod service;
pub mod user;

// Re-exports
pub use booking::*;
pub use client::*;
pub use company::*;
pub use inventory::*;
pub use product::*;
pub use professional::*;
pub use sales::*;
pub use service::*;
pub use user::*;

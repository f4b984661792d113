//! Shared domain types for Kimy.
//!
//! This crate contains the domain types used across the Kimy workspace:
//! conversation messages, the user profile, application configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod profile;

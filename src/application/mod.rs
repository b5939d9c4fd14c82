//! Application layer orchestrating trailer resolution.
//!
//! Services combine domain types with the injected provider and cache
//! implementations.

pub mod services;

//! Utility functions for request path handling.

pub mod path;

//! # PharmaOps Common Library
//!
//! Shared code for the PharmaOps ML service and its callers:
//! - Request/response types for the ML endpoints
//! - Payload field validation
//! - Bootstrap configuration loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};

//! HTTP components of the harness
//!
//! This module contains all HTTP-specific functionality including:
//! - Request/response types for the Users REST API
//! - The client the harness drives requests through
//! - The stub server the harness runs against
//! - The client CLI surface

pub mod cli;
pub mod client;
pub mod server;
pub mod types;

pub use types::*;

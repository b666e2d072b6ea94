pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod telemetry;

pub use config::HarnessConfig;
pub use error::{HarnessError, UserStoreError};
pub use http::client::{ApiResponse, UserApiClient};

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// CORE DATA STRUCTURES
// =============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

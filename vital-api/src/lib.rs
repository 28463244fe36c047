//! VITAL API - REST API Layer
//!
//! Axum HTTP surface over the in-memory event store and the aggregation
//! engine. Handlers stay thin: parse and validate the request, call the
//! store, hand event collections to the engine, serialize the result.
//! Identity is carried per request in the `x-user-id` header.

pub mod config;
pub mod context;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use context::{UserContext, USER_ID_HEADER};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use state::{AppState, SharedStore};
pub use types::*;

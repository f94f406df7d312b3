//! Shared types for etPack ERP
//!
//! Common types used by both the client and the form-list server:
//! the order and form data model, request/response DTOs, the unified
//! error system and small time/id helpers.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Department, FormDescriptor, Order, OrderPatch, OrderStatus, WorkRecord};

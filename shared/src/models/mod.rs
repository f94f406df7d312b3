//! Data models
//!
//! Shared between the client ledger, the form-list server and the browser UI
//! (via JSON). Wire keys are camelCase to match the UI.

pub mod department;
pub mod form;
pub mod order;
pub mod serde_helpers;

// Re-exports
pub use department::*;
pub use form::*;
pub use order::*;

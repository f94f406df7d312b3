//! etPack client - order ledger and department form-list synchronizer
//!
//! Keeps the order ledger in a client-local slot store and mirrors each
//! department's form checklist to the form-list server.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod http;
pub mod intake;
pub mod ledger;
pub mod outcome;
pub mod storage;

pub use client::EtpackClient;
pub use config::ClientConfig;
pub use dashboard::OrderSummary;
pub use error::{ClientError, ClientResult};
pub use forms::{FormListSynchronizer, Persisted, RemoteFormStore, RemoteWrite};
pub use http::HttpClient;
pub use intake::{IntakeError, IntakeForm};
pub use ledger::{Clock, OrderLedger, SystemClock};
pub use outcome::{Degradation, Outcome, WriteOutcome};
pub use storage::{LocalStorage, MemoryStorage, RedbStorage, StorageError};

// Re-export shared types for convenience
pub use shared::{Department, FormDescriptor, Order, OrderPatch, OrderStatus, WorkRecord};

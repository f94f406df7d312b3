use async_trait::async_trait;
use shared::{Department, FormDescriptor};

use crate::ClientResult;

/// Remote keyed store of department form lists
///
/// [`crate::HttpClient`] is the production implementation.
#[async_trait]
pub trait RemoteFormStore: Send + Sync {
    /// Last written list for `department`, empty if never written
    async fn fetch_forms(&self, department: Department) -> ClientResult<Vec<FormDescriptor>>;

    /// Replace the list for `department`; returns the stored list
    async fn store_forms(
        &self,
        department: Department,
        forms: Vec<FormDescriptor>,
    ) -> ClientResult<Vec<FormDescriptor>>;
}

//! Wiring of the ledger and synchronizers over one configuration

use std::sync::Arc;

use shared::Department;

use crate::forms::FormListSynchronizer;
use crate::ledger::OrderLedger;
use crate::storage::LocalStorage;
use crate::{ClientConfig, ClientResult, HttpClient};

/// Entry point for UI code: one slot store, one HTTP client
#[derive(Clone)]
pub struct EtpackClient {
    http: Arc<HttpClient>,
    storage: Arc<dyn LocalStorage>,
    ledger: OrderLedger,
}

impl EtpackClient {
    pub fn open(config: &ClientConfig) -> ClientResult<Self> {
        let http = Arc::new(config.build_http_client()?);
        let storage = config.open_storage()?;
        let ledger = OrderLedger::new(Arc::clone(&storage));
        tracing::debug!(base_url = %http.base_url(), "Client opened");
        Ok(Self {
            http,
            storage,
            ledger,
        })
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn storage(&self) -> Arc<dyn LocalStorage> {
        Arc::clone(&self.storage)
    }

    /// Synchronizer for one department, sharing this client's slot store
    pub fn form_synchronizer(&self, department: Department) -> FormListSynchronizer {
        FormListSynchronizer::new(department, self.http.clone(), self.storage())
    }
}

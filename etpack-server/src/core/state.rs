//! 服务器状态
//!
//! 所有处理器共享的状态，克隆开销为一个 `Arc`。

use std::sync::Arc;

use crate::core::Config;
use crate::store::FormStore;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub forms: Arc<FormStore>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            forms: Arc::new(FormStore::new()),
        }
    }

    /// 初始化服务器状态
    pub fn initialize(config: &Config) -> Self {
        tracing::debug!(environment = %config.environment, "Initializing server state");
        Self::new(config.clone())
    }
}

//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::api::build_router;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state (for sharing with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// 绑定监听端口
    ///
    /// 端口为 0 时由系统分配，通过返回的 listener 获取实际地址
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })
    }

    /// 运行直到 Ctrl+C
    pub async fn run(&self) -> Result<()> {
        let listener = self.bind().await?;
        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };
        self.serve(listener, shutdown).await
    }

    /// 在给定 listener 上提供服务，`shutdown` 完成后优雅关闭
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = build_router(self.state.clone());

        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Internal(e.into()))?;
        tracing::info!("📋 etPack form server listening on {}", addr);

        // 收到关闭信号后，最多等待 shutdown_timeout_ms 让进行中的请求完成
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
        let graceful = async move {
            shutdown.await;
            let _ = signal_tx.send(());
        };

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(graceful)
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => {
                result.map_err(|e| ServerError::Internal(e.into()))?;
            }
            _ = async {
                let _ = signal_rx.await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(timeout_ms = %grace.as_millis(), "Graceful shutdown timed out");
            }
        }

        Ok(())
    }
}

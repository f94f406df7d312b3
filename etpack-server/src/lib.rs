//! etPack Form Server - 部门表单顺序存储服务
//!
//! # 架构概述
//!
//! 为 etPack ERP 的表单管理页面提供部门表单顺序的远程存储。
//! 数据只保存在进程内存中，重启即清空。
//!
//! # 模块结构
//!
//! ```text
//! etpack-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── store.rs       # 部门表单顺序映射
//! └── utils/         # 日志初始化
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use api::{build_app, build_router};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use store::FormStore;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env 并初始化日志
pub fn setup_environment() -> crate::core::Result<Config> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
        __  ____             __
  ___  / /_/ __ \____ ______/ /__
 / _ \/ __/ /_/ / __ `/ ___/ //_/
/  __/ /_/ ____/ /_/ / /__/ ,<
\___/\__/_/    \__,_/\___/_/|_|
    "#
    );
}

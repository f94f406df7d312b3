//! 表单顺序 API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/forms?department=<id> | GET | 读取部门表单顺序 |
//! | /api/forms | POST | 整体替换部门表单顺序 |

mod handler;

use axum::{Router, routing::get};
use shared::request::FORMS_PATH;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(FORMS_PATH, get(handler::get_forms).post(handler::save_forms))
}

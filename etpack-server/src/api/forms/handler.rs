//! Form Order API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use shared::request::{FORM_SAVED_MESSAGE, FormList, FormListQuery, FormListUpdate, non_blank};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::core::ServerState;

/// GET /api/forms?department=<id> - 获取部门表单顺序
///
/// 从未写入的部门返回空列表
pub async fn get_forms(
    State(state): State<ServerState>,
    Query(query): Query<FormListQuery>,
) -> AppResult<ApiResponse<FormList>> {
    let department = non_blank(query.department.as_deref())
        .ok_or_else(|| AppError::new(ErrorCode::DepartmentRequired))?;

    let forms = state.forms.read(department);
    Ok(ApiResponse::success(FormList {
        department: department.to_string(),
        forms,
    }))
}

/// POST /api/forms - 保存部门表单顺序
pub async fn save_forms(
    State(state): State<ServerState>,
    payload: Result<Json<FormListUpdate>, JsonRejection>,
) -> AppResult<ApiResponse<FormList>> {
    let Json(update) = payload.map_err(|rejection| {
        AppError::with_message(ErrorCode::InvalidFormat, rejection.body_text())
    })?;

    let (Some(department), Some(forms)) = (non_blank(update.department.as_deref()), update.forms)
    else {
        return Err(AppError::new(ErrorCode::FormListRequired));
    };

    tracing::debug!(department = %department, count = forms.len(), "Saving form order");
    let forms = state.forms.write(department, forms);

    Ok(ApiResponse::success_with_message(
        FORM_SAVED_MESSAGE,
        FormList {
            department: department.to_string(),
            forms,
        },
    ))
}

//! # testapi ハンドラ
//!
//! ```text
//! GET /api/testapi/{id}
//! ```
//!
//! ID で testuser を 1 件取得し、モデル API のエンベロープで返す。
//! 存在しない場合は 404。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::{
    envelope::{ModelEnvelope, TestUserDto},
    test_user::parse_id,
};
use crate::{app::AppState, error::ApiError, middleware::CurrentRequestId};

pub async fn get_test_api(
    State(state): State<Arc<AppState>>,
    CurrentRequestId(request_id): CurrentRequestId,
    Path(id): Path<String>,
) -> Result<Json<ModelEnvelope<TestUserDto>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.test_users.find_by_id(&id).ok_or_else(|| {
        tracing::debug!(%id, "testapi: testuser が見つかりません");
        ApiError::NotFound
    })?;

    let model = state.test_users.model_definition();
    Ok(Json(ModelEnvelope::new(
        request_id,
        model.name,
        TestUserDto::from(user),
    )))
}

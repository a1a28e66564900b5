//! # testuser REST API ハンドラ
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 成功 | エラー |
//! |----------|------|------|--------|
//! | GET | `/api/testuser` | 200 | - |
//! | POST | `/api/testuser` | 201 | 400 |
//! | GET | `/api/testuser/{id}` | 200 | 404 |
//! | PUT | `/api/testuser/{id}` | 200 | 400 / 404 |
//! | DELETE | `/api/testuser/{id}` | 204 | 404 |
//!
//! UUID として解釈できない ID はストアに存在し得ないため 404 とする。
//! PUT はボディに含まれるフィールドのみを更新する。

use std::sync::Arc;

use atm_locator_domain::test_user::TestUserId;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value as JsonValue;

use super::envelope::{ModelEnvelope, TestUserDto};
use crate::{app::AppState, error::ApiError, middleware::CurrentRequestId};

/// パスの ID を解釈する
pub(crate) fn parse_id(raw: &str) -> Result<TestUserId, ApiError> {
    TestUserId::parse(raw).ok_or(ApiError::NotFound)
}

/// testuser 一覧
pub async fn list_test_users(
    State(state): State<Arc<AppState>>,
    CurrentRequestId(request_id): CurrentRequestId,
) -> Json<ModelEnvelope<Vec<TestUserDto>>> {
    let model = state.test_users.model_definition();
    let users: Vec<TestUserDto> = state
        .test_users
        .find_all()
        .into_iter()
        .map(TestUserDto::from)
        .collect();

    Json(ModelEnvelope::new(request_id, model.plural, users))
}

/// testuser 作成
pub async fn create_test_user(
    State(state): State<Arc<AppState>>,
    CurrentRequestId(request_id): CurrentRequestId,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body?;
    let user = state.test_users.create(&input)?;
    tracing::info!(id = %user.id(), "testuser を作成しました");

    let model = state.test_users.model_definition();
    Ok((
        StatusCode::CREATED,
        Json(ModelEnvelope::new(
            request_id,
            model.name,
            TestUserDto::from(user),
        )),
    ))
}

/// testuser 取得
pub async fn get_test_user(
    State(state): State<Arc<AppState>>,
    CurrentRequestId(request_id): CurrentRequestId,
    Path(id): Path<String>,
) -> Result<Json<ModelEnvelope<TestUserDto>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.test_users.find_by_id(&id).ok_or(ApiError::NotFound)?;

    let model = state.test_users.model_definition();
    Ok(Json(ModelEnvelope::new(
        request_id,
        model.name,
        TestUserDto::from(user),
    )))
}

/// testuser 部分更新
///
/// レコードが存在しなければボディを検証せずに 404 を返す。
pub async fn update_test_user(
    State(state): State<Arc<AppState>>,
    CurrentRequestId(request_id): CurrentRequestId,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<ModelEnvelope<TestUserDto>>, ApiError> {
    let id = parse_id(&id)?;
    if state.test_users.find_by_id(&id).is_none() {
        return Err(ApiError::NotFound);
    }

    let Json(input) = body?;
    let user = state
        .test_users
        .update(&id, &input)?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %user.id(), "testuser を更新しました");

    let model = state.test_users.model_definition();
    Ok(Json(ModelEnvelope::new(
        request_id,
        model.name,
        TestUserDto::from(user),
    )))
}

/// testuser 削除
pub async fn delete_test_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let deleted = state.test_users.delete(&id).ok_or(ApiError::NotFound)?;
    tracing::info!(id = %deleted, "testuser を削除しました");

    Ok(StatusCode::NO_CONTENT)
}

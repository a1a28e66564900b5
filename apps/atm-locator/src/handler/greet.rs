//! # 挨拶ハンドラ
//!
//! ```text
//! GET /api/greet?username=<string>
//! ```
//!
//! - `username` あり → 200、ボディは JSON 文字列 `"Howdy <username>"`
//! - `username` なし → 400、`{"error":"Request validation failed: Parameter (username) is required"}`
//!
//! 空文字（`?username=`）は指定ありとして扱う。
//! `username` が複数ある場合は最初の値を使う。

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::error::ApiError;

/// 挨拶対象のクエリパラメータ名
const USERNAME_PARAM: &str = "username";

pub async fn greet(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<String>, ApiError> {
    let Query(pairs) = query?;
    let username = pairs
        .into_iter()
        .find_map(|(key, value)| (key == USERNAME_PARAM).then_some(value))
        .ok_or_else(|| ApiError::missing_parameter(USERNAME_PARAM))?;

    Ok(Json(format!("Howdy {username}")))
}

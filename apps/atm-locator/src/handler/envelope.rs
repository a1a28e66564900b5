//! # モデル API のレスポンスエンベロープ
//!
//! ```json
//! { "success": true, "request-id": "<id>", "key": "testuser", "testuser": { ... } }
//! ```
//!
//! ペイロードのキーは `key` の値と同じ（単数形または複数形のモデル名）。

use atm_locator_domain::test_user::{TestUser, TestUserId};
use atm_locator_shared::RequestId;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// モデル API のレスポンス
#[derive(Debug, Clone)]
pub struct ModelEnvelope<T> {
    pub request_id: RequestId,
    pub key:        &'static str,
    pub payload:    T,
}

impl<T> ModelEnvelope<T> {
    pub fn new(request_id: RequestId, key: &'static str, payload: T) -> Self {
        Self {
            request_id,
            key,
            payload,
        }
    }
}

impl<T: Serialize> Serialize for ModelEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry("request-id", &self.request_id)?;
        map.serialize_entry("key", self.key)?;
        map.serialize_entry(self.key, &self.payload)?;
        map.end()
    }
}

/// testuser のレスポンス表現
///
/// 値のないフィールドは `null` として出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestUserDto {
    pub id:         TestUserId,
    pub first_name: Option<String>,
    pub last_name:  Option<String>,
    pub email:      Option<String>,
}

impl From<TestUser> for TestUserDto {
    fn from(user: TestUser) -> Self {
        let fields = user.fields().clone();
        Self {
            id:         user.id().clone(),
            first_name: fields.first_name,
            last_name:  fields.last_name,
            email:      fields.email,
        }
    }
}

//! # testuser モデル
//!
//! メモリ上に保存されるサンプルレコード。
//! `first_name` / `last_name` / `email` はいずれも省略可能な文字列で、
//! 型以外のフォーマット検証は行わない。
//!
//! ## ライフサイクル
//!
//! - 作成: ストアが ID を採番する
//! - 更新: ID は不変、それ以外のフィールドを呼び出し元のコピーで置き換える
//! - 削除: ストアから取り除かれ、以降の検索は「不在」になる

use atm_locator_shared::error_response::{
    body_not_object_message,
    invalid_field_type_message,
    unknown_field_message,
};
use serde_json::Value as JsonValue;

use crate::{
    DomainError,
    model::{FieldDefinition, FieldType, ModelDefinition},
};

define_uuid_id! {
    /// testuser の一意識別子
    ///
    /// ストアが作成時に採番し、以降変わらない。
    pub struct TestUserId;
}

/// testuser のフィールド定義（宣言順）
const TEST_USER_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::optional_string("first_name"),
    FieldDefinition::optional_string("last_name"),
    FieldDefinition::optional_string("email"),
];

/// testuser のモデル定義
pub const TEST_USER_MODEL: ModelDefinition = ModelDefinition {
    name:   "testuser",
    plural: "testusers",
    fields: TEST_USER_FIELDS,
};

/// 入力 JSON 上で無視されるキー（ID はストアまたはパスが決める）
const ID_KEY: &str = "id";

/// testuser の ID 以外のフィールド
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestUserFields {
    pub first_name: Option<String>,
    pub last_name:  Option<String>,
    pub email:      Option<String>,
}

impl TestUserFields {
    pub fn new(
        first_name: Option<impl Into<String>>,
        last_name: Option<impl Into<String>>,
        email: Option<impl Into<String>>,
    ) -> Self {
        Self {
            first_name: first_name.map(Into::into),
            last_name:  last_name.map(Into::into),
            email:      email.map(Into::into),
        }
    }

    /// 型の付いていない JSON からフィールドを組み立てる
    ///
    /// 省略されたフィールドは `None` になる。検証規則は [`apply_json`](Self::apply_json) と同じ。
    pub fn from_json(value: &JsonValue) -> Result<Self, DomainError> {
        Self::default().apply_json(value)
    }

    /// 型の付いていない JSON に含まれるフィールドだけを上書きする
    ///
    /// - ボディは JSON オブジェクトであること
    /// - 既知のフィールドは文字列または `null` であること（`null` は値の消去）
    /// - 未定義のフィールドは拒否する
    /// - `id` キーは無視する
    ///
    /// JSON に現れないフィールドは元の値のまま残る。
    pub fn apply_json(mut self, value: &JsonValue) -> Result<Self, DomainError> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::Validation(body_not_object_message()))?;

        for (key, value) in object {
            if key == ID_KEY {
                continue;
            }
            let definition = TEST_USER_MODEL
                .field(key)
                .ok_or_else(|| DomainError::Validation(unknown_field_message(key)))?;
            let parsed = parse_field(definition, value)?;
            if let Some(slot) = self.slot_mut(definition.name) {
                *slot = parsed;
            }
        }

        Ok(self)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "first_name" => Some(&mut self.first_name),
            "last_name" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            _ => None,
        }
    }
}

/// フィールド定義に従って JSON 値を読み取る
fn parse_field(
    definition: &FieldDefinition,
    value: &JsonValue,
) -> Result<Option<String>, DomainError> {
    match (definition.field_type, value) {
        (_, JsonValue::Null) => Ok(None),
        (FieldType::String, JsonValue::String(s)) => Ok(Some(s.clone())),
        _ => Err(DomainError::Validation(invalid_field_type_message(
            definition.name,
        ))),
    }
}

/// testuser レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestUser {
    id:     TestUserId,
    fields: TestUserFields,
}

impl TestUser {
    pub fn new(id: TestUserId, fields: TestUserFields) -> Self {
        Self { id, fields }
    }

    /// ID を保ったままフィールドを置き換えたレコードを返す
    pub fn with_fields(self, fields: TestUserFields) -> Self {
        Self {
            id: self.id,
            fields,
        }
    }

    pub fn id(&self) -> &TestUserId {
        &self.id
    }

    pub fn fields(&self) -> &TestUserFields {
        &self.fields
    }

    pub fn first_name(&self) -> Option<&str> {
        self.fields.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.fields.last_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.email.as_deref()
    }
}

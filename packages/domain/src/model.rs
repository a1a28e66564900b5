//! # モデル定義
//!
//! モデルのフィールド構成を静的なメタデータとして表現する。
//! 入力 JSON のバリデーション（未定義フィールド・型不一致の検出）は
//! このメタデータを基準に行う。

use derive_more::Display;
use serde::Serialize;

/// フィールドの型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[display("string")]
    String,
}

/// フィールド定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// フィールド名
    #[serde(skip)]
    pub name:       &'static str,
    /// 値の型
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// 必須かどうか
    pub required:   bool,
    /// 省略可能かどうか（`required` の否定。元の定義形式に合わせて両方持つ）
    pub optional:   bool,
}

impl FieldDefinition {
    /// 省略可能な文字列フィールドを定義する
    pub const fn optional_string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            required: false,
            optional: true,
        }
    }
}

/// モデル定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDefinition {
    /// モデル名（単数形、レスポンスの `key` に使用）
    pub name:   &'static str,
    /// 複数形（コレクションレスポンスの `key` に使用）
    pub plural: &'static str,
    /// フィールド定義（宣言順）
    pub fields: &'static [FieldDefinition],
}

impl ModelDefinition {
    /// 名前でフィールド定義を検索する
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

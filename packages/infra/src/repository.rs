//! # リポジトリ
//!
//! testuser レコードの CRUD 操作を抽象化するトレイト。
//!
//! ## 設計方針
//!
//! - ストアは単一の所有者が持つ前提のため、操作は同期的に値を返す
//! - 変更系の操作は `&mut self` を取り、実装側でロックを持たない
//! - 「見つからない」はエラーではなく `None` で返す
//!
//! 並行アクセスが必要な場合は呼び出し側（ユースケース層）で排他する。

pub mod memory;

use atm_locator_domain::test_user::{TestUser, TestUserFields, TestUserId};

/// testuser リポジトリトレイト
pub trait TestUserRepository: Send {
    /// 新しい ID を採番してレコードを保存し、保存したレコードを返す
    fn create(&mut self, fields: TestUserFields) -> TestUser;

    /// ID でレコードを検索する
    ///
    /// 存在しない場合は `None`（エラーではない）。
    fn find_by_id(&self, id: &TestUserId) -> Option<TestUser>;

    /// 全レコードを作成順に返す
    fn find_all(&self) -> Vec<TestUser>;

    /// レコードの ID 以外のフィールドを置き換える
    ///
    /// 指定 ID のレコードが存在しない場合は `None`。
    fn update(&mut self, user: TestUser) -> Option<TestUser>;

    /// レコードを削除し、削除したレコードの ID を返す
    ///
    /// 指定 ID のレコードが存在しない場合は `None`。
    fn delete(&mut self, id: &TestUserId) -> Option<TestUserId>;

    /// 接続先のコネクタ名（例: `"memory"`）
    fn connector_name(&self) -> &'static str;
}

//! # testuser ユースケース

use std::sync::{Mutex, MutexGuard, PoisonError};

use atm_locator_domain::{
    DomainError,
    model::ModelDefinition,
    test_user::{TEST_USER_MODEL, TestUser, TestUserFields, TestUserId},
};
use atm_locator_infra::TestUserRepository;
use serde_json::Value as JsonValue;

/// testuser の CRUD ユースケース
pub struct TestUserUseCase {
    store: Mutex<Box<dyn TestUserRepository>>,
}

impl TestUserUseCase {
    pub fn new(repository: impl TestUserRepository + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(repository)),
        }
    }

    /// ストアのロックを取得する
    ///
    /// ストアは素のデータしか持たないため、poison されていても中身を使い続ける。
    fn store(&self) -> MutexGuard<'_, Box<dyn TestUserRepository>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// JSON 入力を検証してレコードを作成する
    pub fn create(&self, input: &JsonValue) -> Result<TestUser, DomainError> {
        let fields = TestUserFields::from_json(input)?;
        Ok(self.create_fields(fields))
    }

    /// 型付きのフィールドからレコードを作成する
    pub fn create_fields(&self, fields: TestUserFields) -> TestUser {
        self.store().create(fields)
    }

    pub fn find_by_id(&self, id: &TestUserId) -> Option<TestUser> {
        self.store().find_by_id(id)
    }

    pub fn find_all(&self) -> Vec<TestUser> {
        self.store().find_all()
    }

    /// レコード全体（ID 以外のフィールド）を置き換える
    pub fn update_record(&self, user: TestUser) -> Option<TestUser> {
        self.store().update(user)
    }

    /// JSON に含まれるフィールドだけを更新する
    ///
    /// レコードが存在しなければ入力を検証せずに `Ok(None)` を返す。
    /// 検索と更新は同じロックの中で行う。
    pub fn update(
        &self,
        id: &TestUserId,
        input: &JsonValue,
    ) -> Result<Option<TestUser>, DomainError> {
        let mut store = self.store();
        let Some(current) = store.find_by_id(id) else {
            return Ok(None);
        };

        let fields = current.fields().clone().apply_json(input)?;
        Ok(store.update(current.with_fields(fields)))
    }

    pub fn delete(&self, id: &TestUserId) -> Option<TestUserId> {
        self.store().delete(id)
    }

    /// モデル定義
    pub fn model_definition(&self) -> &'static ModelDefinition {
        &TEST_USER_MODEL
    }

    /// ストアのコネクタ名
    pub fn connector_name(&self) -> &'static str {
        self.store().connector_name()
    }
}

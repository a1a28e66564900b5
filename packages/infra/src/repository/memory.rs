//! # メモリストア
//!
//! プロセス内メモリに testuser を保持する [`TestUserRepository`] 実装。
//! レコードは作成順の `Vec` で保持する。

use atm_locator_domain::test_user::{TestUser, TestUserFields, TestUserId};

use super::TestUserRepository;

/// コネクタ名
const CONNECTOR_NAME: &str = "memory";

/// メモリ上の testuser ストア
#[derive(Debug, Default)]
pub struct MemoryTestUserStore {
    users: Vec<TestUser>,
}

impl MemoryTestUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &TestUserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }

    /// 既存レコードと衝突しない ID を採番する
    fn next_id(&self) -> TestUserId {
        loop {
            let id = TestUserId::new();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl TestUserRepository for MemoryTestUserStore {
    #[tracing::instrument(skip_all, level = "debug")]
    fn create(&mut self, fields: TestUserFields) -> TestUser {
        let user = TestUser::new(self.next_id(), fields);
        self.users.push(user.clone());
        tracing::debug!(id = %user.id(), "testuser を作成しました");
        user
    }

    fn find_by_id(&self, id: &TestUserId) -> Option<TestUser> {
        self.users.iter().find(|u| u.id() == id).cloned()
    }

    fn find_all(&self) -> Vec<TestUser> {
        self.users.clone()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %user.id()))]
    fn update(&mut self, user: TestUser) -> Option<TestUser> {
        let pos = self.position(user.id())?;
        self.users[pos] = user.clone();
        tracing::debug!("testuser を更新しました");
        Some(user)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    fn delete(&mut self, id: &TestUserId) -> Option<TestUserId> {
        let pos = self.position(id)?;
        let removed = self.users.remove(pos);
        tracing::debug!("testuser を削除しました");
        Some(removed.id().clone())
    }

    fn connector_name(&self) -> &'static str {
        CONNECTOR_NAME
    }
}

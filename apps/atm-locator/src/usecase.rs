//! # ユースケース層
//!
//! ハンドラとストアの間に入り、入力の検証とストアへのアクセスをまとめる。
//!
//! ストアは単一所有者前提の同期 API（`&mut self`）なので、
//! 非同期サーバーから共有するためにここで `Mutex` に包む。
//! ロックは `.await` をまたいで保持しない。

pub mod test_user;

pub use test_user::TestUserUseCase;

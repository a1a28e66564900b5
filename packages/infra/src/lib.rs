//! # ATM Locator インフラ層
//!
//! レコードストアの抽象（リポジトリトレイト）と、その実装を提供する。
//!
//! ## モジュール構成
//!
//! - [`repository`] - リポジトリトレイトと実装
//!
//! 現在の実装はプロセス内メモリのみ（コネクタ名 `memory`）。
//! 永続化は行わず、プロセス終了とともにデータは失われる。

pub mod repository;

pub use repository::{TestUserRepository, memory::MemoryTestUserStore};

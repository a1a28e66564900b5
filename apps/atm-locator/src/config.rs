//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `ATM_LOCATOR_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `ATM_LOCATOR_PORT` | No | `8080` | ポート番号 |
//! | `API_KEY` | No | - | 設定時は `/api/*` に API キー認証を要求する |
//!
//! ログ関連（`RUST_LOG`, `LOG_FORMAT`）は
//! [`atm_locator_shared::observability`] が読み込む。

use std::{env, fmt};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない値
    #[error("{name} は有効なポート番号である必要があります: {value:?}")]
    InvalidPort {
        /// 環境変数名
        name:  &'static str,
        /// 設定されていた値
        value: String,
    },
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、[`App`](crate::app::App) に渡す。
#[derive(Clone)]
pub struct AppConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`, `localhost`）
    pub host:    String,
    /// ポート番号（`0` で OS に空きポートを割り当てさせる）
    pub port:    u16,
    /// API キー（`None` なら認証しない）
    pub api_key: Option<String>,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// プロセスの環境変数を汚さずにテストするために使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("ATM_LOCATOR_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("ATM_LOCATOR_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    name: "ATM_LOCATOR_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        // 空文字は未設定として扱う
        let api_key = lookup("API_KEY").filter(|key| !key.is_empty());

        Ok(Self {
            host,
            port,
            api_key,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_環境変数の値を読み込む() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ATM_LOCATOR_HOST", "127.0.0.1"),
            ("ATM_LOCATOR_PORT", "18080"),
            ("API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 18080);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_不正なポートはエラーになる() {
        let result = AppConfig::from_lookup(lookup_from(&[("ATM_LOCATOR_PORT", "http")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidPort {
                name:  "ATM_LOCATOR_PORT",
                value: "http".to_string(),
            }
        );
    }

    #[test]
    fn test_空のapi_keyは未設定として扱う() {
        let config = AppConfig::from_lookup(lookup_from(&[("API_KEY", "")])).unwrap();

        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_debug出力でapi_keyがマスクされる() {
        let config = AppConfig::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}

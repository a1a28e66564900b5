//! 起動・停止の統合テスト
//!
//! 実際の TCP ソケットでサーバーを起動し、リクエストを処理してから停止する。

mod helpers;

use atm_locator::app::App;
use atm_locator_domain::test_user::TestUserFields;
use helpers::test_config;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_空きポートで起動しリクエストを処理して停止する() {
    let running = App::new(test_config(None)).start().await.unwrap();
    let addr = running.local_addr();
    assert_ne!(addr.port(), 0);

    let user = running
        .state()
        .test_users
        .create_fields(TestUserFields::new(
            Some("Johnny"),
            Some("Test"),
            Some("jtest@axway.com"),
        ));

    let client = reqwest::Client::new();
    let greet = client
        .get(format!("http://{addr}/api/greet"))
        .query(&[("username", "Johnny Test")])
        .send()
        .await
        .unwrap();
    assert_eq!(greet.status(), reqwest::StatusCode::OK);
    assert_eq!(greet.text().await.unwrap(), r#""Howdy Johnny Test""#);

    let api = client
        .get(format!("http://{addr}/api/testapi/{}", user.id()))
        .send()
        .await
        .unwrap();
    assert_eq!(api.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = api.json().await.unwrap();
    assert_eq!(body["testuser"]["first_name"], "Johnny");

    running.stop().await.unwrap();

    // 停止後はリスナーが解放されている
    let after = client.get(format!("http://{addr}/health")).send().await;
    assert!(after.is_err());
}

#[tokio::test]
async fn test_使用中のポートへのバインドはエラーになる() {
    let first = App::new(test_config(None)).start().await.unwrap();
    let mut config = test_config(None);
    config.port = first.local_addr().port();

    let result = App::new(config).start().await;

    assert!(result.is_err());
    first.stop().await.unwrap();
}

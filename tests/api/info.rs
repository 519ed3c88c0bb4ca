use crate::helpers;
use serde_json::Value;

#[tokio::test]
async fn info_reports_service_metadata() {
    let app = helpers::spawn_app().await;

    let response = app.send_get("info").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("invalid JSON body");
    assert_eq!(body["name"], "chatrelay");
    assert!(body["version"].is_string());
    assert!(
        body["features"]
            .as_array()
            .expect("features should be a list")
            .iter()
            .any(|f| f == "Text sanitization")
    );
    assert!(body["timestamp"].is_string());
}

use crate::helpers::{self, next_json_frame, send_text};
use serde_json::Value;

#[tokio::test]
async fn a_fresh_relay_reports_zeroed_counters() {
    let app = helpers::spawn_app().await;

    let response = app.send_get("stats").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("invalid JSON body");
    assert_eq!(body["total_connections"], 0);
    assert_eq!(body["active_connections"], 0);
    assert_eq!(body["messages_relayed"], 0);
    assert_eq!(body["injection_attempts"], 0);
    assert_eq!(body["security_status"], "ACTIVE");
    assert!(body["uptime_formatted"].is_string());
}

#[actix_web::test]
async fn relayed_messages_and_connections_are_counted() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");

    // Greeting frame
    let greeting = next_json_frame(&mut connection).await;
    assert_eq!(greeting["event"], "connection-info");

    send_text(&mut connection, r##"{"name":"Alice","message":"hi","color":"#336699"}"##).await;
    // Wait for the broadcast so the counters are settled before reading them
    let _ = next_json_frame(&mut connection).await;

    let body: Value = app
        .send_get("stats")
        .await
        .json()
        .await
        .expect("invalid JSON body");
    assert_eq!(body["total_connections"], 1);
    assert_eq!(body["active_connections"], 1);
    assert_eq!(body["messages_relayed"], 1);
    assert_eq!(body["injection_attempts"], 0);
}

#[actix_web::test]
async fn injection_attempts_are_counted_separately() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _greeting = next_json_frame(&mut connection).await;

    send_text(
        &mut connection,
        r##"{"name":"Mallory","message":"<script>alert(1)</script>","color":"#FF0000"}"##,
    )
    .await;
    // security-warning first, then the sanitized broadcast
    let warning = next_json_frame(&mut connection).await;
    assert_eq!(warning["event"], "security-warning");
    let _broadcast = next_json_frame(&mut connection).await;

    let body: Value = app
        .send_get("stats")
        .await
        .json()
        .await
        .expect("invalid JSON body");
    assert_eq!(body["injection_attempts"], 1);
    assert_eq!(body["messages_relayed"], 1);
}

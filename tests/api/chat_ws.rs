use crate::helpers::{self, next_json_frame, send_text};

#[actix_web::test]
async fn a_clean_message_is_broadcast_back_intact() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");

    let greeting = next_json_frame(&mut connection).await;
    assert_eq!(greeting["event"], "connection-info");
    assert!(greeting["connection_id"].is_string());

    send_text(
        &mut connection,
        r##"{"name":"Alice","message":"hello there","color":"#336699","ts":1700000000000}"##,
    )
    .await;

    let broadcast = next_json_frame(&mut connection).await;
    assert_eq!(broadcast["name"], "Alice");
    assert_eq!(broadcast["message"], "hello there");
    assert_eq!(broadcast["color"], "#336699");
    assert_eq!(broadcast["ts"], 1_700_000_000_000_i64);
    assert!(broadcast.get("media").is_none());
}

#[actix_web::test]
async fn hostile_markup_is_sanitized_before_the_broadcast() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _greeting = next_json_frame(&mut connection).await;

    send_text(
        &mut connection,
        r##"{"nombre":"Hacker","mensaje":"<script>alert(1)</script>","color":"#FF0000"}"##,
    )
    .await;

    let warning = next_json_frame(&mut connection).await;
    assert_eq!(warning["event"], "security-warning");

    let broadcast = next_json_frame(&mut connection).await;
    assert_eq!(broadcast["name"], "Hacker");
    let message = broadcast["message"].as_str().expect("message is text");
    assert!(!message.to_lowercase().contains("<script"));
    assert_eq!(broadcast["color"], "#FF0000");
}

#[actix_web::test]
async fn garbage_input_is_replaced_by_the_fallback_record() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _greeting = next_json_frame(&mut connection).await;

    send_text(&mut connection, "definitely not json").await;

    let broadcast = next_json_frame(&mut connection).await;
    assert_eq!(broadcast["name"], "System");
    assert_eq!(broadcast["message"], "Invalid message");
    assert_eq!(broadcast["color"], "#FF0000");
}

#[actix_web::test]
async fn a_media_url_body_is_relayed_as_embed_markup() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _greeting = next_json_frame(&mut connection).await;

    send_text(
        &mut connection,
        r##"{"name":"Alice","message":"https://i.imgur.com/abc.png","color":"#336699"}"##,
    )
    .await;

    let broadcast = next_json_frame(&mut connection).await;
    let message = broadcast["message"].as_str().expect("message is text");
    assert!(message.starts_with("<img "));
    assert!(message.contains("https://i.imgur.com/abc.png"));
}

#[actix_web::test]
async fn messages_reach_every_connected_client() {
    let app = helpers::spawn_app().await;

    let (_ra, mut alice) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _ = next_json_frame(&mut alice).await;

    let (_rb, mut bob) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _ = next_json_frame(&mut bob).await;

    send_text(&mut alice, r##"{"name":"Alice","message":"hi bob","color":"#336699"}"##).await;

    let to_bob = next_json_frame(&mut bob).await;
    assert_eq!(to_bob["name"], "Alice");
    assert_eq!(to_bob["message"], "hi bob");

    let to_alice = next_json_frame(&mut alice).await;
    assert_eq!(to_alice["message"], "hi bob");
}

#[actix_web::test]
async fn a_valid_inline_attachment_rides_along_with_the_message() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _greeting = next_json_frame(&mut connection).await;

    let payload = serde_json::json!({
        "name": "Alice",
        "message": "look at this",
        "color": "#336699",
        "media": {
            "type": "image",
            "dataUrl": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==",
            "mime": "image/png",
            "name": "pixel.png",
            "size": 24,
        },
    });
    send_text(&mut connection, &payload.to_string()).await;

    let broadcast = next_json_frame(&mut connection).await;
    assert_eq!(broadcast["message"], "look at this");
    assert_eq!(broadcast["media"]["type"], "image");
    assert_eq!(broadcast["media"]["mime"], "image/png");
}

#[actix_web::test]
async fn an_invalid_attachment_is_dropped_but_the_text_still_relays() {
    let app = helpers::spawn_app().await;

    let (_response, mut connection) = awc::Client::new()
        .ws(app.ws_url())
        .connect()
        .await
        .expect("ws connect failed");
    let _greeting = next_json_frame(&mut connection).await;

    let payload = serde_json::json!({
        "name": "Alice",
        "message": "sneaky payload",
        "color": "#336699",
        "media": {
            "type": "image",
            "dataUrl": "data:text/html;base64,PHNjcmlwdD4=",
        },
    });
    send_text(&mut connection, &payload.to_string()).await;

    let broadcast = next_json_frame(&mut connection).await;
    assert_eq!(broadcast["message"], "sneaky payload");
    assert!(broadcast.get("media").is_none());
}

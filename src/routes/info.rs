use actix_web::HttpResponse;
use chrono::Utc;

/// Static service metadata, mirrored by the `/info` endpoint.
pub async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "name": "chatrelay",
        "version": env!("CARGO_PKG_VERSION"),
        "security": "XSS protection enabled",
        "features": [
            "Text sanitization",
            "Image URL embedding",
            "Video URL embedding",
            "YouTube embedding",
            "Inline media attachments",
        ],
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

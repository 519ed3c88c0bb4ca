use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::stats::RelayStats;

#[tracing::instrument(skip(stats))]
pub async fn relay_stats(stats: web::Data<RelayStats>) -> HttpResponse {
    let snapshot = stats.snapshot();
    HttpResponse::Ok().json(serde_json::json!({
        "total_connections": snapshot.total_connections,
        "active_connections": snapshot.active_connections,
        "messages_relayed": snapshot.messages_relayed,
        "injection_attempts": snapshot.injection_attempts,
        "media_shared": snapshot.media_shared,
        "uptime_seconds": snapshot.uptime_seconds,
        "uptime_formatted": snapshot.uptime_formatted,
        "security_status": "ACTIVE",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

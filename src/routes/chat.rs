use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::{Message, MessageStream, Session};
use chrono::Utc;
use futures_util::StreamExt;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::configuration::RelayConfigs;
use crate::domain::{self, MediaAttachment};
use crate::sanitizer;
use crate::stats::RelayStats;

/// What actually goes out on the wire: the validated record plus the
/// transport-level extras (timestamp, optional attachment).
#[derive(Serialize)]
struct RelayFrame {
    name: String,
    message: String,
    color: String,
    ts: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<MediaAttachment>,
}

/// Upgrades the request and hands the socket to a relay session task.
pub async fn chat_ws(
    req: HttpRequest,
    body: web::Payload,
    broadcaster: web::Data<broadcast::Sender<String>>,
    stats: web::Data<RelayStats>,
    relay_configs: web::Data<RelayConfigs>,
) -> actix_web::Result<HttpResponse> {
    let (response, session, message_stream) = actix_ws::handle(&req, body)?;

    actix_web::rt::spawn(relay_session(
        session,
        message_stream,
        broadcaster.get_ref().clone(),
        stats.into_inner(),
        relay_configs.max_attachment_bytes,
    ));

    Ok(response)
}

async fn relay_session(
    mut session: Session,
    mut message_stream: MessageStream,
    broadcaster: broadcast::Sender<String>,
    stats: Arc<RelayStats>,
    max_attachment_bytes: u64,
) {
    let connection_id = Uuid::new_v4();
    let active = stats.record_connection();
    tracing::info!(%connection_id, active_connections = active, "Client connected");

    let mut inbox = broadcaster.subscribe();

    let greeting = serde_json::json!({
        "event": "connection-info",
        "connection_id": connection_id,
        "connected_at": Utc::now().to_rfc3339(),
        "server": format!("chatrelay {}", env!("CARGO_PKG_VERSION")),
    });
    let _ = session.text(greeting.to_string()).await;

    loop {
        tokio::select! {
            frame = message_stream.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        handle_inbound(
                            &text,
                            connection_id,
                            &mut session,
                            &broadcaster,
                            &stats,
                            max_attachment_bytes,
                        )
                        .await;
                    }
                    Some(Ok(Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(reason))) => {
                        tracing::info!(%connection_id, ?reason, "Client sent close");
                        break;
                    }
                    // Binary, Pong and continuation frames are not part of the protocol
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(%connection_id, error = %e, "WebSocket protocol error");
                        break;
                    }
                    None => break,
                }
            }
            outbound = inbox.recv() => {
                match outbound {
                    Ok(payload) => {
                        if session.text(payload).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(%connection_id, skipped, "Slow consumer skipped broadcasts");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    let remaining = stats.record_disconnect();
    tracing::info!(%connection_id, active_connections = remaining, "Client disconnected");
    if remaining == 0 {
        let snapshot = stats.snapshot();
        tracing::info!(
            messages_relayed = snapshot.messages_relayed,
            injection_attempts = snapshot.injection_attempts,
            media_shared = snapshot.media_shared,
            "Last client left; session summary"
        );
    }

    let _ = session.close(None).await;
}

#[tracing::instrument(skip_all, fields(%connection_id))]
async fn handle_inbound(
    raw: &str,
    connection_id: Uuid,
    session: &mut Session,
    broadcaster: &broadcast::Sender<String>,
    stats: &RelayStats,
    max_attachment_bytes: u64,
) {
    // Detection runs over the original text; it only feeds counters and the
    // warning frame, never the relayed output.
    if sanitizer::detect_injection_attempt(raw) {
        stats.record_injection_attempt();
        tracing::warn!("Injection attempt detected and neutralized");

        let warning = serde_json::json!({
            "event": "security-warning",
            "message": "Executable content detected; the message was sanitized before relay",
            "timestamp": Utc::now().to_rfc3339(),
        });
        let _ = session.text(warning.to_string()).await;
    }

    let validated = domain::validate_message(raw);

    // Timestamp and attachment ride outside the sanitized record
    let original: Option<Value> = serde_json::from_str(raw).ok();
    let ts = original
        .as_ref()
        .and_then(|v| v.get("ts"))
        .and_then(Value::as_i64)
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    let media = original
        .as_ref()
        .and_then(|v| v.get("media"))
        .filter(|m| m.is_object())
        .and_then(|m| match MediaAttachment::parse(m, max_attachment_bytes) {
            Ok(attachment) => {
                stats.record_media_shared();
                Some(attachment)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected media attachment");
                None
            }
        });

    let frame = RelayFrame {
        name: validated.name,
        message: validated.message,
        color: validated.color,
        ts,
        media,
    };

    match serde_json::to_string(&frame) {
        Ok(payload) => {
            // Err means no receiver is subscribed, which cannot happen while
            // this session holds one
            let _ = broadcaster.send(payload);
            stats.record_message();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode relay frame");
        }
    }
}

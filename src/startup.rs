use crate::configuration::Configuration;
use crate::routes::{chat_ws, health_check, relay_stats, service_info};
use crate::stats::RelayStats;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing_actix_web::TracingLogger;

// Relayed frames waiting per slow consumer before it starts skipping
const BROADCAST_CAPACITY: usize = 256;

pub struct Application {
    port: u16,
    server: Server,
    stats: Arc<RelayStats>,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();

        let stats = Arc::new(RelayStats::new());
        let server = run(listener, config, stats.clone())
            .context("Failed to run Actix web server")?;

        Ok(Self {
            port,
            server,
            stats,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The counter set shared with the background stats reporter.
    pub fn stats(&self) -> Arc<RelayStats> {
        self.stats.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        // run returns a Server type, which implements Future trait
        self.server.await.context("Server stopped with an error")
    }
}

fn run(
    tcp_listener: TcpListener,
    config: Configuration,
    stats: Arc<RelayStats>,
) -> Result<Server, anyhow::Error> {
    // One channel fans every validated frame out to all connected sessions
    let (broadcaster, _) = broadcast::channel::<String>(BROADCAST_CAPACITY);
    let broadcaster = web::Data::new(broadcaster);
    let stats = web::Data::from(stats);
    let relay_configs = web::Data::new(config.relay.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            // register shared relay state as part of the application state
            .app_data(broadcaster.clone())
            .app_data(stats.clone())
            .app_data(relay_configs.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .route("/info", web::get().to(service_info))
        .route("/stats", web::get().to(relay_stats))
        .route("/ws", web::get().to(chat_ws));
}

use chatrelay::configuration::get_config;
use chatrelay::startup::Application;
use chatrelay::stats_reporter::run_reporter_until_stopped;
use chatrelay::telemetry;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = telemetry::get_subscriber("chatrelay".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let config = get_config()?;
    let report_interval = Duration::from_secs(config.relay.stats_report_interval_secs);

    let application = Application::build(config).await?;
    tracing::info!(port = application.port(), "Relay listening");

    let stats = application.stats();
    tokio::select! {
        outcome = application.run_until_stopped() => {
            if let Err(e) = outcome {
                tracing::error!(error.cause_chain = ?e, "Server stopped with an error");
            }
        }
        _ = run_reporter_until_stopped(stats.clone(), report_interval) => {
            tracing::error!("Stats reporter stopped unexpectedly");
        }
    }

    // Final summary before the process exits
    let snapshot = stats.snapshot();
    tracing::info!(
        total_connections = snapshot.total_connections,
        messages_relayed = snapshot.messages_relayed,
        injection_attempts = snapshot.injection_attempts,
        media_shared = snapshot.media_shared,
        uptime = %snapshot.uptime_formatted,
        "Relay shut down"
    );

    Ok(())
}

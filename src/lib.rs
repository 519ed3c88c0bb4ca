pub mod configuration;
pub mod domain;
pub mod media;
pub mod routes;
pub mod sanitizer;
pub mod startup;
pub mod stats;
pub mod stats_reporter;
pub mod telemetry;
pub mod utils;

pub mod debug;
pub mod entries_handler;
pub mod health;
pub mod metrics;
pub mod settings_handler;
pub mod stats_handler;

pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};

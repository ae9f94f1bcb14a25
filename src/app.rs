pub use configuration::*;
pub use startup::LaunchpageApp;
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;

//! Observability setup for Deskmate: `tracing` subscriber installation and
//! optional OpenTelemetry export.

pub mod tracing_setup;

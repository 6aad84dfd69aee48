//! Shared pieces of the wayseek demo programs.
//!
//! The binaries only build fixtures, read configuration, and print what
//! the report functions here return.

pub mod config;
pub mod report;

pub use config::{ConfigError, DemoConfig, LIMITS_ENV};
pub use report::{dls_report, graph_report, grid_report, route_view};

//! inventory-charts: theme-aware inventory dashboard charts.
//!
//! The crate shapes inventory data into three chart specs (item popularity,
//! stock level, daily activity), mounts them through a pluggable renderer and
//! restyles their text when the light/dark theme toggles.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartPresenter, ChartRegistry, PresenterConfig};
pub use error::{ChartError, ChartResult};

mod builders;
mod config;
mod json_contract;
mod presenter;
mod registry;

pub use builders::{
    ACTIVITY_DATASET_LABEL, ACTIVITY_X_TITLE, ACTIVITY_Y_TITLE, POPULARITY_DATASET_LABEL,
    STOCK_DATASET_LABEL, daily_activity_chart_spec, popularity_chart_spec, stock_chart_spec,
    stock_colors,
};
pub use config::{ChartPalette, MountPoints, PresenterConfig};
pub use json_contract::{
    CHART_REGISTRY_JSON_SCHEMA_V1, CHART_SPEC_JSON_SCHEMA_V1, ChartRegistryJsonContractV1,
    ChartSpecJsonContractV1,
};
pub use presenter::{ChartPresenter, compute_stock_color, resolve_text_color};
pub use registry::{ChartHandle, ChartRegistry, ChartRole};

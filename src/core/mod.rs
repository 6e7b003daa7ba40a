pub mod color;
pub mod scale;
pub mod series;
pub mod spec;
pub mod stock;
pub mod theme;
pub mod types;

pub use color::Color;
pub use scale::LinearScale;
pub use series::{ActivitySeries, ItemSeries, LOG_TIMESTAMP_FORMAT, LogAction, LogEntry};
pub use spec::{
    AxisOptions, AxisTitle, ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, Fill,
    IndexAxis, Legend, LegendLabels, Plugins, Scales, TickStyle,
};
pub use stock::{StockLevel, StockThresholds, max_quantity};
pub use theme::{ThemeMode, ThemeSource, ThemeToggle};
pub use types::{MountPoint, Viewport};

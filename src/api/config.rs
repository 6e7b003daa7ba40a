use serde::{Deserialize, Serialize};

use crate::core::{Color, MountPoint, StockLevel, StockThresholds, ThemeMode};
use crate::error::{ChartError, ChartResult};

use super::ChartRole;

/// Colors used by the three charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    /// Axis and legend text while the light theme is active.
    pub light_text: Color,
    /// Axis and legend text while the dark theme is active.
    pub dark_text: Color,
    pub popularity_bar: Color,
    pub stock_low: Color,
    pub stock_medium: Color,
    pub stock_high: Color,
    pub activity_line: Color,
    pub activity_fill: Color,
}

impl ChartPalette {
    pub const LIGHT_TEXT: Color = Color::from_hex_u32(0x111827);
    pub const DARK_TEXT: Color = Color::from_hex_u32(0xe5e7eb);
    pub const POPULARITY_BAR: Color = Color::from_hex_u32(0x60a5fa);
    pub const STOCK_LOW: Color = Color::from_hex_u32(0xef4444);
    pub const STOCK_MEDIUM: Color = Color::from_hex_u32(0xfacc15);
    pub const STOCK_HIGH: Color = Color::from_hex_u32(0x22c55e);
    pub const ACTIVITY_LINE: Color = Color::from_hex_u32(0x3b82f6);
    pub const ACTIVITY_FILL: Color = Color::rgba(59, 130, 246, 0.2);

    #[must_use]
    pub fn text_color(&self, mode: ThemeMode) -> Color {
        match mode {
            ThemeMode::Light => self.light_text,
            ThemeMode::Dark => self.dark_text,
        }
    }

    #[must_use]
    pub fn stock_color(&self, level: StockLevel) -> Color {
        match level {
            StockLevel::Low => self.stock_low,
            StockLevel::Medium => self.stock_medium,
            StockLevel::High => self.stock_high,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.light_text,
            self.dark_text,
            self.popularity_bar,
            self.stock_low,
            self.stock_medium,
            self.stock_high,
            self.activity_line,
            self.activity_fill,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            light_text: Self::LIGHT_TEXT,
            dark_text: Self::DARK_TEXT,
            popularity_bar: Self::POPULARITY_BAR,
            stock_low: Self::STOCK_LOW,
            stock_medium: Self::STOCK_MEDIUM,
            stock_high: Self::STOCK_HIGH,
            activity_line: Self::ACTIVITY_LINE,
            activity_fill: Self::ACTIVITY_FILL,
        }
    }
}

/// Surface identifiers, one per chart role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoints {
    pub popularity: MountPoint,
    pub stock: MountPoint,
    pub daily_activity: MountPoint,
}

impl MountPoints {
    #[must_use]
    pub fn get(&self, role: ChartRole) -> &MountPoint {
        match role {
            ChartRole::Popularity => &self.popularity,
            ChartRole::Stock => &self.stock,
            ChartRole::DailyActivity => &self.daily_activity,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MountPoint> {
        ChartRole::ALL.into_iter().map(|role| self.get(role))
    }

    pub fn validate(&self) -> ChartResult<()> {
        for role in ChartRole::ALL {
            let mount = self.get(role);
            if mount.as_str().is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "mount point for {role} must not be empty"
                )));
            }
            let duplicates = self.iter().filter(|other| *other == mount).count();
            if duplicates > 1 {
                return Err(ChartError::InvalidData(format!(
                    "mount point `{mount}` is assigned to more than one chart"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            popularity: MountPoint::new("popularityChart"),
            stock: MountPoint::new("stockChart"),
            daily_activity: MountPoint::new("dailyActivityChart"),
        }
    }
}

/// Presenter bootstrap configuration.
///
/// Serializable so hosts can ship chart setup alongside their page config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresenterConfig {
    #[serde(default)]
    pub mount_points: MountPoints,
    #[serde(default)]
    pub palette: ChartPalette,
    #[serde(default)]
    pub stock_thresholds: StockThresholds,
}

impl PresenterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mount_points(mut self, mount_points: MountPoints) -> Self {
        self.mount_points = mount_points;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_stock_thresholds(mut self, thresholds: StockThresholds) -> Self {
        self.stock_thresholds = thresholds;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.mount_points.validate()?;
        self.palette.validate()?;
        self.stock_thresholds.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing sections fall back to defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

//! Library-agnostic chart description.
//!
//! Field names serialize to the camelCase schema used by Chart.js so a spec
//! can be handed to a browser unchanged, while headless renderers read the
//! same structure directly.

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Axis carrying the categories. `Y` turns a bar chart horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    #[default]
    X,
    Y,
}

/// Dataset fill: one color for every point, or one per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Uniform(Color),
    PerPoint(Vec<Color>),
}

impl Fill {
    /// Color used for the point at `index`.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<Color> {
        match self {
            Self::Uniform(color) => Some(*color),
            Self::PerPoint(colors) => colors.get(index).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Fill,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub fill: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>, background_color: Fill) -> Self {
        Self {
            label: label.into(),
            data,
            background_color,
            border_color: None,
            fill: false,
            tension: None,
            point_radius: None,
            point_hover_radius: None,
        }
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Fills the area under a line and smooths it with `tension`.
    #[must_use]
    pub fn with_area(mut self, tension: f64) -> Self {
        self.fill = true;
        self.tension = Some(tension);
        self
    }

    #[must_use]
    pub fn with_point_radii(mut self, radius: f64, hover_radius: f64) -> Self {
        self.point_radius = Some(radius);
        self.point_hover_radius = Some(hover_radius);
        self
    }

    fn validate(&self, label_count: usize) -> ChartResult<()> {
        if self.data.len() != label_count {
            return Err(ChartError::SeriesLengthMismatch {
                series: "dataset",
                left: label_count,
                right: self.data.len(),
            });
        }
        if self.data.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` values must be finite",
                self.label
            )));
        }
        match &self.background_color {
            Fill::Uniform(color) => color.validate()?,
            Fill::PerPoint(colors) => {
                if colors.len() != self.data.len() {
                    return Err(ChartError::SeriesLengthMismatch {
                        series: "dataset colors",
                        left: self.data.len(),
                        right: colors.len(),
                    });
                }
                for color in colors {
                    color.validate()?;
                }
            }
        }
        if let Some(tension) = self.tension {
            if !tension.is_finite() || !(0.0..=1.0).contains(&tension) {
                return Err(ChartError::InvalidData(
                    "line tension must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        for radius in [self.point_radius, self.point_hover_radius].into_iter().flatten() {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ChartError::InvalidData(
                    "point radius must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "is_false")]
    pub begin_at_zero: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub ticks: TickStyle,
}

impl AxisOptions {
    #[must_use]
    pub fn with_tick_color(color: Color) -> Self {
        Self {
            begin_at_zero: false,
            title: None,
            ticks: TickStyle { color },
        }
    }

    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>, color: Color) -> Self {
        self.title = Some(AxisTitle {
            display: true,
            text: text.into(),
            color,
        });
        self
    }

    #[must_use]
    pub fn beginning_at_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

impl ChartOptions {
    /// Recolors every text element that has a style block.
    ///
    /// Tick colors are always set; axis titles and legend labels only when
    /// the chart configures them.
    pub fn apply_text_color(&mut self, color: Color) {
        for axis in [&mut self.scales.x, &mut self.scales.y] {
            axis.ticks.color = color;
            if let Some(title) = axis.title.as_mut() {
                title.color = color;
            }
        }
        if let Some(labels) = self.plugins.legend.labels.as_mut() {
            labels.color = color;
        }
    }

    #[must_use]
    pub fn category_axis(&self) -> IndexAxis {
        self.index_axis.unwrap_or_default()
    }
}

/// Complete description of one chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn validate(&self) -> ChartResult<()> {
        if self.data.datasets.is_empty() {
            return Err(ChartError::InvalidData(
                "chart must have at least one dataset".to_owned(),
            ));
        }
        for dataset in &self.data.datasets {
            dataset.validate(self.data.labels.len())?;
        }
        if self.kind == ChartKind::Line && self.options.category_axis() == IndexAxis::Y {
            return Err(ChartError::InvalidData(
                "line charts only support categories on the x axis".to_owned(),
            ));
        }
        Ok(())
    }

    /// Every data value across datasets, in dataset order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data
            .datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

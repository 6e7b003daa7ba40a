use crate::core::Color;
use crate::error::{ChartError, ChartResult};

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle in pixel space. A corner radius of half the size draws a dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            corner_radius: 0.0,
        }
    }

    /// Square of side `2 * radius` centered on `(cx, cy)`, fully rounded.
    #[must_use]
    pub fn dot(cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            x: cx - radius,
            y: cy - radius,
            width: radius * 2.0,
            height: radius * 2.0,
            fill_color,
            corner_radius: radius,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// What a text primitive labels, so restyling can be observed per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Tick,
    AxisTitle,
    Legend,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub role: TextRole,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        role: TextRole,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            role,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive, TextRole};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    pub fn texts_with_role(&self, role: TextRole) -> impl Iterator<Item = &TextPrimitive> {
        self.texts.iter().filter(move |text| text.role == role)
    }
}

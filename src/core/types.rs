use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of one chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 360)
    }
}

/// Identifier of a display surface a chart is rendered into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountPoint(String);

impl MountPoint {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MountPoint {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

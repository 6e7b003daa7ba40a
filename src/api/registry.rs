use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ChartOptions, ChartSpec, MountPoint};
use crate::error::ChartResult;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartRole {
    Popularity,
    Stock,
    DailyActivity,
}

impl ChartRole {
    pub const ALL: [Self; 3] = [Self::Popularity, Self::Stock, Self::DailyActivity];
}

impl fmt::Display for ChartRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Popularity => "popularity",
            Self::Stock => "stock",
            Self::DailyActivity => "daily activity",
        })
    }
}

/// Mutable handle to a chart mounted on a surface.
///
/// Style edits go through [`ChartHandle::options_mut`] and become visible
/// after [`ChartHandle::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    role: ChartRole,
    mount: MountPoint,
    spec: ChartSpec,
    revision: u64,
}

impl ChartHandle {
    pub(crate) fn new(role: ChartRole, mount: MountPoint, spec: ChartSpec) -> Self {
        Self {
            role,
            mount,
            spec,
            revision: 0,
        }
    }

    #[must_use]
    pub fn role(&self) -> ChartRole {
        self.role
    }

    #[must_use]
    pub fn mount(&self) -> &MountPoint {
        &self.mount
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.spec.options
    }

    pub fn options_mut(&mut self) -> &mut ChartOptions {
        &mut self.spec.options
    }

    /// Number of redraws since the chart was mounted.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Asks `renderer` to repaint this chart with its current spec.
    pub fn update<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        renderer.redraw(&self.mount, &self.spec)?;
        self.revision += 1;
        Ok(())
    }
}

/// The three mounted charts, one per role.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRegistry {
    popularity: ChartHandle,
    stock: ChartHandle,
    daily_activity: ChartHandle,
}

impl ChartRegistry {
    pub(crate) fn new(
        popularity: ChartHandle,
        stock: ChartHandle,
        daily_activity: ChartHandle,
    ) -> Self {
        Self {
            popularity,
            stock,
            daily_activity,
        }
    }

    #[must_use]
    pub fn get(&self, role: ChartRole) -> &ChartHandle {
        match role {
            ChartRole::Popularity => &self.popularity,
            ChartRole::Stock => &self.stock,
            ChartRole::DailyActivity => &self.daily_activity,
        }
    }

    pub fn get_mut(&mut self, role: ChartRole) -> &mut ChartHandle {
        match role {
            ChartRole::Popularity => &mut self.popularity,
            ChartRole::Stock => &mut self.stock,
            ChartRole::DailyActivity => &mut self.daily_activity,
        }
    }

    #[must_use]
    pub fn popularity(&self) -> &ChartHandle {
        &self.popularity
    }

    #[must_use]
    pub fn stock(&self) -> &ChartHandle {
        &self.stock
    }

    #[must_use]
    pub fn daily_activity(&self) -> &ChartHandle {
        &self.daily_activity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartHandle> {
        [&self.popularity, &self.stock, &self.daily_activity].into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ChartHandle> {
        [
            &mut self.popularity,
            &mut self.stock,
            &mut self.daily_activity,
        ]
        .into_iter()
    }
}

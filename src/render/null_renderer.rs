use indexmap::IndexMap;

use crate::core::{ChartSpec, MountPoint};
use crate::error::ChartResult;
use crate::render::{Renderer, SurfaceRegistry};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates every spec and tracks surface bindings so tests catch
/// malformed charts and mount mistakes without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    surfaces: SurfaceRegistry,
    redraws: IndexMap<MountPoint, usize>,
    pub last_dataset_count: usize,
    pub last_label_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn with_surfaces<I, M>(ids: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MountPoint>,
    {
        Self {
            surfaces: SurfaceRegistry::with_surfaces(ids),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn add_surface(&mut self, id: impl Into<MountPoint>) {
        self.surfaces.add_surface(id);
    }

    /// Redraw requests received by `mount` since it was mounted.
    #[must_use]
    pub fn redraw_count(&self, mount: &MountPoint) -> usize {
        self.redraws.get(mount).copied().unwrap_or(0)
    }

    fn record(&mut self, spec: &ChartSpec) {
        self.last_dataset_count = spec.data.datasets.len();
        self.last_label_count = spec.data.labels.len();
    }
}

impl Renderer for NullRenderer {
    fn check_mount(&self, mount: &MountPoint) -> ChartResult<()> {
        self.surfaces.check_bindable(mount)
    }

    fn mount(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        spec.validate()?;
        self.surfaces.bind(mount)?;
        self.redraws.insert(mount.clone(), 0);
        self.record(spec);
        Ok(())
    }

    fn redraw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        self.surfaces.ensure_bound(mount)?;
        spec.validate()?;
        *self.redraws.entry(mount.clone()).or_insert(0) += 1;
        self.record(spec);
        Ok(())
    }
}

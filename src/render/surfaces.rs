use indexmap::IndexMap;

use crate::core::MountPoint;
use crate::error::{ChartError, ChartResult};

/// Tracks which surfaces exist and which of them already host a chart.
///
/// Every renderer in this crate keeps one of these so that mounting on an
/// unknown surface, mounting twice, or redrawing an unmounted surface fail
/// the same way regardless of backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceRegistry {
    bound: IndexMap<MountPoint, bool>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn with_surfaces<I, M>(ids: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MountPoint>,
    {
        let mut registry = Self::default();
        for id in ids {
            registry.add_surface(id);
        }
        registry
    }

    /// Registers a surface. Re-registering keeps its binding state.
    pub fn add_surface(&mut self, id: impl Into<MountPoint>) {
        self.bound.entry(id.into()).or_insert(false);
    }

    #[must_use]
    pub fn is_bound(&self, mount: &MountPoint) -> bool {
        self.bound.get(mount).copied().unwrap_or(false)
    }

    /// Fails the way [`Self::bind`] would, without binding.
    pub fn check_bindable(&self, mount: &MountPoint) -> ChartResult<()> {
        match self.bound.get(mount) {
            None => Err(ChartError::MissingMountPoint(mount.to_string())),
            Some(true) => Err(ChartError::MountPointAlreadyBound(mount.to_string())),
            Some(false) => Ok(()),
        }
    }

    /// Marks `mount` as hosting a chart.
    pub fn bind(&mut self, mount: &MountPoint) -> ChartResult<()> {
        self.check_bindable(mount)?;
        self.bound.insert(mount.clone(), true);
        Ok(())
    }

    pub fn ensure_bound(&self, mount: &MountPoint) -> ChartResult<()> {
        if self.is_bound(mount) {
            Ok(())
        } else {
            Err(ChartError::NotMounted(mount.to_string()))
        }
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &MountPoint> {
        self.bound.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::SurfaceRegistry;
    use crate::core::MountPoint;
    use crate::error::ChartError;

    #[test]
    fn binding_follows_surface_lifecycle() {
        let mut surfaces = SurfaceRegistry::with_surfaces(["stockChart"]);
        let stock = MountPoint::new("stockChart");
        let missing = MountPoint::new("nope");

        assert!(matches!(
            surfaces.ensure_bound(&stock),
            Err(ChartError::NotMounted(_))
        ));
        surfaces.check_bindable(&stock).expect("unbound surface");
        assert!(!surfaces.is_bound(&stock));
        surfaces.bind(&stock).expect("first bind");
        surfaces.ensure_bound(&stock).expect("bound");
        assert!(matches!(
            surfaces.bind(&stock),
            Err(ChartError::MountPointAlreadyBound(_))
        ));
        assert!(matches!(
            surfaces.bind(&missing),
            Err(ChartError::MissingMountPoint(_))
        ));
        assert!(matches!(
            surfaces.check_bindable(&stock),
            Err(ChartError::MountPointAlreadyBound(_))
        ));
        assert!(matches!(
            surfaces.check_bindable(&missing),
            Err(ChartError::MissingMountPoint(_))
        ));

        surfaces.add_surface("stockChart");
        assert!(surfaces.is_bound(&stock));
    }
}

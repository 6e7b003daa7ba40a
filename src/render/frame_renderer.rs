use indexmap::IndexMap;
use tracing::trace;

use crate::core::{ChartSpec, MountPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, SurfaceRegistry, layout_chart};

/// Headless renderer that keeps the latest laid-out frame per surface.
#[derive(Debug)]
pub struct FrameRenderer {
    viewport: Viewport,
    surfaces: SurfaceRegistry,
    frames: IndexMap<MountPoint, RenderFrame>,
}

impl FrameRenderer {
    pub fn new<I, M>(viewport: Viewport, surfaces: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<MountPoint>,
    {
        viewport.validate()?;
        Ok(Self {
            viewport,
            surfaces: SurfaceRegistry::with_surfaces(surfaces),
            frames: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn frame(&self, mount: &MountPoint) -> Option<&RenderFrame> {
        self.frames.get(mount)
    }

    pub fn frames(&self) -> impl Iterator<Item = (&MountPoint, &RenderFrame)> {
        self.frames.iter()
    }

    fn draw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        let frame = layout_chart(spec, self.viewport)?;
        frame.validate()?;
        trace!(
            mount = %mount,
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "laid out chart frame"
        );
        self.frames.insert(mount.clone(), frame);
        Ok(())
    }
}

impl Renderer for FrameRenderer {
    fn check_mount(&self, mount: &MountPoint) -> ChartResult<()> {
        self.surfaces.check_bindable(mount)
    }

    fn mount(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        // Surface errors take precedence over layout errors.
        self.surfaces.check_bindable(mount)?;
        self.draw(mount, spec)?;
        self.surfaces.bind(mount)
    }

    fn redraw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        self.surfaces.ensure_bound(mount)?;
        self.draw(mount, spec)
    }
}

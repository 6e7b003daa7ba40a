mod config_renderer;
mod frame;
mod frame_renderer;
mod layout;
mod null_renderer;
mod primitives;
mod surfaces;

pub use crate::core::Color;
pub use config_renderer::ConfigRenderer;
pub use frame::RenderFrame;
pub use frame_renderer::FrameRenderer;
pub use layout::{format_tick_value, layout_chart};
pub use null_renderer::NullRenderer;
pub use primitives::{LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextRole};
pub use surfaces::SurfaceRegistry;

use crate::core::{ChartSpec, MountPoint};
use crate::error::ChartResult;

/// Contract implemented by any chart rendering backend.
///
/// `mount` binds a chart to a surface exactly once; `redraw` repaints an
/// already bound surface after its spec was mutated in place. Backends own
/// the surface bookkeeping and report unknown or double-bound surfaces as
/// errors.
pub trait Renderer {
    /// Reports the error `mount` would raise for this surface, if any,
    /// without touching it.
    fn check_mount(&self, mount: &MountPoint) -> ChartResult<()>;

    fn mount(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()>;

    fn redraw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};

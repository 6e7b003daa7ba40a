use cairo::{Context, Format, ImageSurface};
use indexmap::IndexMap;
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::io::Write;

use crate::core::{ChartSpec, Color, MountPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SurfaceRegistry, TextHAlign, layout_chart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango offscreen renderer, one image surface per mount point.
#[derive(Debug)]
pub struct CairoRenderer {
    viewport: Viewport,
    surfaces: SurfaceRegistry,
    images: IndexMap<MountPoint, ImageSurface>,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new<I, M>(viewport: Viewport, surfaces: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<MountPoint>,
    {
        viewport.validate()?;
        Ok(Self {
            viewport,
            surfaces: SurfaceRegistry::with_surfaces(surfaces),
            images: IndexMap::new(),
            clear_color: Color::rgb(255, 255, 255),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Background painted before each frame, typically the page background of
    /// the active theme.
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    #[must_use]
    pub fn image(&self, mount: &MountPoint) -> Option<&ImageSurface> {
        self.images.get(mount)
    }

    pub fn write_png<W: Write>(&self, mount: &MountPoint, writer: &mut W) -> ChartResult<()> {
        let image = self
            .images
            .get(mount)
            .ok_or_else(|| ChartError::NotMounted(mount.to_string()))?;
        image
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn draw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        let frame = layout_chart(spec, self.viewport)?;
        let width = i32::try_from(self.viewport.width)
            .map_err(|_| ChartError::InvalidData("surface width exceeds i32".to_owned()))?;
        let height = i32::try_from(self.viewport.height)
            .map_err(|_| ChartError::InvalidData("surface height exceeds i32".to_owned()))?;
        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = paint_frame(&context, &frame, self.clear_color)?;
        drop(context);
        self.images.insert(mount.clone(), image);
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn check_mount(&self, mount: &MountPoint) -> ChartResult<()> {
        self.surfaces.check_bindable(mount)
    }

    fn mount(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        self.surfaces.check_bindable(mount)?;
        self.draw(mount, spec)?;
        self.surfaces.bind(mount)
    }

    fn redraw(&mut self, mount: &MountPoint, spec: &ChartSpec) -> ChartResult<()> {
        self.surfaces.ensure_bound(mount)?;
        self.draw(mount, spec)
    }
}

fn paint_frame(
    context: &Context,
    frame: &RenderFrame,
    clear_color: Color,
) -> ChartResult<CairoRenderStats> {
    frame.validate()?;
    clear_color.validate()?;

    apply_color(context, clear_color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;

    let mut stats = CairoRenderStats::default();

    for rect in &frame.rects {
        append_rect_path(context, *rect);
        apply_color(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y - f64::from(text_height) / 2.0);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn apply_color(context: &Context, color: Color) {
    let (red, green, blue, alpha) = color.normalized();
    context.set_source_rgba(red, green, blue, alpha);
}

fn append_rect_path(context: &Context, rect: crate::render::RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

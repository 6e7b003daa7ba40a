use tracing::{debug, trace};

use crate::core::{ActivitySeries, Color, ItemSeries, StockThresholds, ThemeSource};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{
    ChartHandle, ChartPalette, ChartRegistry, ChartRole, PresenterConfig, daily_activity_chart_spec,
    popularity_chart_spec, stock_chart_spec, stock_colors,
};

/// Builds the inventory charts and keeps their text in step with the theme.
///
/// The presenter owns the renderer and reads the theme through `T`; the
/// mounted charts live in the [`ChartRegistry`] returned by
/// [`ChartPresenter::create_charts`], which restyling then borrows.
pub struct ChartPresenter<R: Renderer, T: ThemeSource> {
    renderer: R,
    theme: T,
    config: PresenterConfig,
}

impl<R: Renderer, T: ThemeSource> ChartPresenter<R, T> {
    pub fn new(renderer: R, theme: T, config: PresenterConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            theme,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &T {
        &self.theme
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Axis and legend text color for the active theme.
    #[must_use]
    pub fn resolve_text_color(&self) -> Color {
        self.config.palette.text_color(self.theme.current_theme())
    }

    /// Bar color for `quantity` relative to `max_quantity` (at least 1).
    #[must_use]
    pub fn stock_color(&self, quantity: f64, max_quantity: f64) -> Color {
        let level = self.config.stock_thresholds.classify(quantity, max_quantity);
        self.config.palette.stock_color(level)
    }

    /// Builds and mounts the popularity, stock and daily activity charts.
    ///
    /// Every surface is checked and every spec validated before the first
    /// chart is mounted, so a missing or already bound surface leaves all
    /// three surfaces untouched and the call can be retried.
    pub fn create_charts(
        &mut self,
        items: &ItemSeries,
        activity: &ActivitySeries,
    ) -> ChartResult<ChartRegistry> {
        let text_color = self.resolve_text_color();
        let palette = &self.config.palette;
        let colors = stock_colors(items, self.config.stock_thresholds, palette);
        debug!(
            items = items.len(),
            days = activity.len(),
            max_quantity = items.max_quantity(),
            text_color = %text_color,
            "create charts"
        );

        let popularity = popularity_chart_spec(items, palette, text_color);
        let stock = stock_chart_spec(items, colors, text_color);
        let daily_activity = daily_activity_chart_spec(activity, palette, text_color);

        for (role, spec) in [
            (ChartRole::Popularity, &popularity),
            (ChartRole::Stock, &stock),
            (ChartRole::DailyActivity, &daily_activity),
        ] {
            self.renderer.check_mount(self.config.mount_points.get(role))?;
            spec.validate()?;
        }

        let popularity = self.mount(ChartRole::Popularity, popularity)?;
        let stock = self.mount(ChartRole::Stock, stock)?;
        let daily_activity = self.mount(ChartRole::DailyActivity, daily_activity)?;
        Ok(ChartRegistry::new(popularity, stock, daily_activity))
    }

    /// Same as [`Self::create_charts`] from the four raw columns.
    ///
    /// Mismatched column lengths are rejected before anything is mounted.
    pub fn create_charts_from_columns(
        &mut self,
        item_names: Vec<String>,
        quantities: Vec<f64>,
        dates: Vec<String>,
        daily_counts: Vec<f64>,
    ) -> ChartResult<ChartRegistry> {
        let items = ItemSeries::new(item_names, quantities)?;
        let activity = ActivitySeries::new(dates, daily_counts)?;
        self.create_charts(&items, &activity)
    }

    /// Recolors ticks, axis titles and legend labels of every chart with the
    /// current theme's text color, then redraws each chart.
    ///
    /// All charts are recolored before the first redraw. If a redraw fails
    /// its error is returned; every handle already carries the new colors,
    /// and charts after the failed one keep their old drawing until the next
    /// call. Data values are left untouched. Calling this again without a
    /// theme change leaves every style field as it was.
    pub fn update_chart_colors(&mut self, registry: &mut ChartRegistry) -> ChartResult<()> {
        let text_color = self.resolve_text_color();
        debug!(text_color = %text_color, "update chart colors");
        for handle in registry.iter_mut() {
            handle.options_mut().apply_text_color(text_color);
        }
        for handle in registry.iter_mut() {
            handle.update(&mut self.renderer)?;
            trace!(
                role = %handle.role(),
                revision = handle.revision(),
                "chart restyled"
            );
        }
        Ok(())
    }

    fn mount(&mut self, role: ChartRole, spec: crate::core::ChartSpec) -> ChartResult<ChartHandle> {
        let mount = self.config.mount_points.get(role).clone();
        self.renderer.mount(&mount, &spec)?;
        trace!(role = %role, mount = %mount, "chart mounted");
        Ok(ChartHandle::new(role, mount, spec))
    }
}

/// Text color for `theme` with the default palette.
#[must_use]
pub fn resolve_text_color<T: ThemeSource + ?Sized>(theme: &T) -> Color {
    ChartPalette::default().text_color(theme.current_theme())
}

/// Stock color with the default palette and thresholds.
///
/// `max_quantity` must be at least 1.
#[must_use]
pub fn compute_stock_color(quantity: f64, max_quantity: f64) -> Color {
    let level = StockThresholds::default().classify(quantity, max_quantity);
    ChartPalette::default().stock_color(level)
}

#[cfg(test)]
mod tests {
    use super::{compute_stock_color, resolve_text_color};
    use crate::api::ChartPalette;
    use crate::core::ThemeMode;

    #[test]
    fn stock_color_scenario_matches_brackets() {
        let colors: Vec<_> = [10.0, 50.0, 90.0]
            .into_iter()
            .map(|q| compute_stock_color(q, 90.0))
            .collect();
        assert_eq!(
            colors,
            vec![
                ChartPalette::STOCK_LOW,
                ChartPalette::STOCK_MEDIUM,
                ChartPalette::STOCK_HIGH
            ]
        );
    }

    #[test]
    fn text_color_depends_only_on_theme() {
        assert_eq!(resolve_text_color(&ThemeMode::Light).to_css(), "#111827");
        assert_eq!(resolve_text_color(&ThemeMode::Dark).to_css(), "#e5e7eb");
    }
}

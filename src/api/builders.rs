//! One spec builder per chart role.

use crate::core::{
    ActivitySeries, AxisOptions, ChartData, ChartKind, ChartOptions, ChartSpec, Color, Dataset,
    Fill, IndexAxis, ItemSeries, Legend, LegendLabels, Plugins, Scales, StockThresholds,
};

use super::ChartPalette;

pub const POPULARITY_DATASET_LABEL: &str = "Quantity";
pub const STOCK_DATASET_LABEL: &str = "Stock Level";
pub const ACTIVITY_DATASET_LABEL: &str = "Daily Activity";
pub const ACTIVITY_Y_TITLE: &str = "Items Added/Removed";
pub const ACTIVITY_X_TITLE: &str = "Date";

const ACTIVITY_TENSION: f64 = 0.3;
const ACTIVITY_POINT_RADIUS: f64 = 5.0;
const ACTIVITY_POINT_HOVER_RADIUS: f64 = 7.0;

/// Per-item bar colors from the stock brackets.
#[must_use]
pub fn stock_colors(
    items: &ItemSeries,
    thresholds: StockThresholds,
    palette: &ChartPalette,
) -> Vec<Color> {
    let max = items.max_quantity();
    items
        .quantities()
        .iter()
        .map(|quantity| palette.stock_color(thresholds.classify(*quantity, max)))
        .collect()
}

/// Horizontal bars of item quantities in the accent color.
#[must_use]
pub fn popularity_chart_spec(
    items: &ItemSeries,
    palette: &ChartPalette,
    text_color: Color,
) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: items.item_names().to_vec(),
            datasets: vec![Dataset::new(
                POPULARITY_DATASET_LABEL,
                items.quantities().to_vec(),
                Fill::Uniform(palette.popularity_bar),
            )],
        },
        options: ChartOptions {
            index_axis: Some(IndexAxis::Y),
            responsive: true,
            plugins: hidden_legend(text_color),
            scales: tick_only_scales(text_color),
        },
    }
}

/// Vertical bars of item quantities colored by stock bracket.
#[must_use]
pub fn stock_chart_spec(
    items: &ItemSeries,
    stock_colors: Vec<Color>,
    text_color: Color,
) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: items.item_names().to_vec(),
            datasets: vec![Dataset::new(
                STOCK_DATASET_LABEL,
                items.quantities().to_vec(),
                Fill::PerPoint(stock_colors),
            )],
        },
        options: ChartOptions {
            index_axis: None,
            responsive: true,
            plugins: hidden_legend(text_color),
            scales: tick_only_scales(text_color),
        },
    }
}

/// Smoothed, filled line of daily movements with titled axes.
#[must_use]
pub fn daily_activity_chart_spec(
    activity: &ActivitySeries,
    palette: &ChartPalette,
    text_color: Color,
) -> ChartSpec {
    let dataset = Dataset::new(
        ACTIVITY_DATASET_LABEL,
        activity.daily_counts().to_vec(),
        Fill::Uniform(palette.activity_fill),
    )
    .with_border_color(palette.activity_line)
    .with_area(ACTIVITY_TENSION)
    .with_point_radii(ACTIVITY_POINT_RADIUS, ACTIVITY_POINT_HOVER_RADIUS);

    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels: activity.dates().to_vec(),
            datasets: vec![dataset],
        },
        options: ChartOptions {
            index_axis: None,
            responsive: true,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    labels: Some(LegendLabels { color: text_color }),
                },
            },
            scales: Scales {
                x: AxisOptions::with_tick_color(text_color).with_title(ACTIVITY_X_TITLE, text_color),
                y: AxisOptions::with_tick_color(text_color)
                    .with_title(ACTIVITY_Y_TITLE, text_color)
                    .beginning_at_zero(),
            },
        },
    }
}

fn hidden_legend(text_color: Color) -> Plugins {
    Plugins {
        legend: Legend {
            display: false,
            labels: Some(LegendLabels { color: text_color }),
        },
    }
}

fn tick_only_scales(text_color: Color) -> Scales {
    Scales {
        x: AxisOptions::with_tick_color(text_color),
        y: AxisOptions::with_tick_color(text_color),
    }
}

#[cfg(test)]
mod tests {
    use super::{daily_activity_chart_spec, popularity_chart_spec, stock_colors};
    use crate::api::ChartPalette;
    use crate::core::{ActivitySeries, Color, IndexAxis, ItemSeries, StockThresholds};

    fn items(quantities: &[f64]) -> ItemSeries {
        let names = (0..quantities.len()).map(|i| format!("item-{i}")).collect();
        ItemSeries::new(names, quantities.to_vec()).expect("valid items")
    }

    #[test]
    fn stock_colors_follow_brackets() {
        let palette = ChartPalette::default();
        let colors = stock_colors(
            &items(&[10.0, 50.0, 90.0]),
            StockThresholds::default(),
            &palette,
        );
        assert_eq!(
            colors,
            vec![palette.stock_low, palette.stock_medium, palette.stock_high]
        );
    }

    #[test]
    fn stock_colors_of_empty_series_are_empty() {
        let colors = stock_colors(
            &ItemSeries::default(),
            StockThresholds::default(),
            &ChartPalette::default(),
        );
        assert!(colors.is_empty());
    }

    #[test]
    fn popularity_chart_is_horizontal_without_legend() {
        let text = Color::from_hex_u32(0x111827);
        let spec = popularity_chart_spec(&items(&[3.0]), &ChartPalette::default(), text);
        assert_eq!(spec.options.index_axis, Some(IndexAxis::Y));
        assert!(!spec.options.plugins.legend.display);
        assert_eq!(spec.options.scales.x.ticks.color, text);
        spec.validate().expect("valid spec");
    }

    #[test]
    fn activity_chart_titles_both_axes() {
        let activity = ActivitySeries::new(vec!["2024-01-01".to_owned()], vec![4.0])
            .expect("valid activity");
        let spec = daily_activity_chart_spec(&activity, &ChartPalette::default(), Color::rgb(1, 2, 3));
        let x_title = spec.options.scales.x.title.as_ref().expect("x title");
        let y_title = spec.options.scales.y.title.as_ref().expect("y title");
        assert_eq!(x_title.text, "Date");
        assert_eq!(y_title.text, "Items Added/Removed");
        assert!(spec.options.scales.y.begin_at_zero);
        assert!(spec.options.plugins.legend.display);
        assert!(spec.data.datasets[0].fill);
    }
}

//! Projects a [`ChartSpec`] onto pixel primitives.
//!
//! Category positions are evenly spaced bands; values use a zero-based
//! linear scale. Line tension is not reproduced, segments are straight.

use crate::core::{
    AxisOptions, ChartKind, ChartSpec, Color, Dataset, IndexAxis, LinearScale, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextRole,
};

const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 48.0;
const FONT_SIZE_PX: f64 = 12.0;
const BAR_FILL_RATIO: f64 = 0.8;
const VALUE_TICK_COUNT: usize = 5;
const DEFAULT_POINT_RADIUS: f64 = 3.0;
const LINE_WIDTH: f64 = 2.0;
const GRID_COLOR: Color = Color::rgba(128, 128, 128, 0.35);

#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PlotArea {
    fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        if width <= MARGIN_LEFT + MARGIN_RIGHT || height <= MARGIN_TOP + MARGIN_BOTTOM {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            left: MARGIN_LEFT,
            right: width - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height - MARGIN_BOTTOM,
        })
    }
}

/// Category band geometry along the category axis.
#[derive(Debug, Clone, Copy)]
struct Bands {
    start: f64,
    width: f64,
}

impl Bands {
    fn center(self, index: usize) -> f64 {
        self.start + self.width * (index as f64 + 0.5)
    }
}

/// Builds the frame for `spec` on a surface of `viewport` size.
pub fn layout_chart(spec: &ChartSpec, viewport: Viewport) -> ChartResult<RenderFrame> {
    spec.validate()?;
    let area = PlotArea::for_viewport(viewport)?;
    let values: Vec<f64> = spec.values().collect();
    let scale = LinearScale::from_zero_based_values(&values)?;
    let category_axis = spec.options.category_axis();
    let category_count = spec.data.labels.len().max(1) as f64;

    let bands = match category_axis {
        IndexAxis::X => Bands {
            start: area.left,
            width: (area.right - area.left) / category_count,
        },
        IndexAxis::Y => Bands {
            start: area.top,
            width: (area.bottom - area.top) / category_count,
        },
    };

    let mut frame = RenderFrame::new(viewport);
    push_axis_lines(&mut frame, area);

    match spec.kind {
        ChartKind::Bar => {
            let dataset_count = spec.data.datasets.len();
            for (slot, dataset) in spec.data.datasets.iter().enumerate() {
                push_bars(
                    &mut frame,
                    dataset,
                    category_axis,
                    bands,
                    area,
                    scale,
                    slot,
                    dataset_count,
                )?;
            }
        }
        ChartKind::Line => {
            for dataset in &spec.data.datasets {
                push_line(&mut frame, dataset, bands, area, scale)?;
            }
        }
    }

    let (category_options, value_options) = match category_axis {
        IndexAxis::X => (&spec.options.scales.x, &spec.options.scales.y),
        IndexAxis::Y => (&spec.options.scales.y, &spec.options.scales.x),
    };
    push_category_ticks(
        &mut frame,
        &spec.data.labels,
        category_options,
        category_axis,
        bands,
        area,
    );
    push_value_ticks(&mut frame, value_options, category_axis, scale, area)?;
    push_axis_titles(&mut frame, spec, area, viewport);
    push_legend(&mut frame, spec, area);

    Ok(frame)
}

fn push_axis_lines(frame: &mut RenderFrame, area: PlotArea) {
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.bottom,
        area.right,
        area.bottom,
        1.0,
        GRID_COLOR,
    ));
    frame.lines.push(LinePrimitive::new(
        area.left, area.top, area.left, area.bottom, 1.0, GRID_COLOR,
    ));
}

#[allow(clippy::too_many_arguments)]
fn push_bars(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    category_axis: IndexAxis,
    bands: Bands,
    area: PlotArea,
    scale: LinearScale,
    slot: usize,
    dataset_count: usize,
) -> ChartResult<()> {
    let thickness = bands.width * BAR_FILL_RATIO / dataset_count as f64;
    for (index, value) in dataset.data.iter().copied().enumerate() {
        let Some(color) = dataset.background_color.color_at(index) else {
            continue;
        };
        let band_offset = bands.start + bands.width * index as f64;
        let lead = band_offset
            + bands.width * (1.0 - BAR_FILL_RATIO) / 2.0
            + thickness * slot as f64;

        let rect = match category_axis {
            IndexAxis::X => {
                let base = scale.domain_to_pixel(0.0, area.bottom, area.top)?;
                let tip = scale.domain_to_pixel(value, area.bottom, area.top)?;
                RectPrimitive::new(lead, base.min(tip), thickness, (base - tip).abs(), color)
            }
            IndexAxis::Y => {
                let base = scale.domain_to_pixel(0.0, area.left, area.right)?;
                let tip = scale.domain_to_pixel(value, area.left, area.right)?;
                RectPrimitive::new(base.min(tip), lead, (tip - base).abs(), thickness, color)
            }
        };
        frame.rects.push(rect);
    }
    Ok(())
}

fn push_line(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    bands: Bands,
    area: PlotArea,
    scale: LinearScale,
) -> ChartResult<()> {
    let fill_color = dataset.background_color.color_at(0);
    let stroke_color = dataset
        .border_color
        .or(fill_color)
        .unwrap_or(GRID_COLOR);
    let baseline = scale.domain_to_pixel(0.0, area.bottom, area.top)?;

    let mut points = Vec::with_capacity(dataset.data.len());
    for (index, value) in dataset.data.iter().copied().enumerate() {
        let y = scale.domain_to_pixel(value, area.bottom, area.top)?;
        points.push((bands.center(index), y));
    }

    for pair in points.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        if dataset.fill {
            if let Some(color) = fill_color {
                let mid = (y1 + y2) / 2.0;
                frame.rects.push(RectPrimitive::new(
                    x1,
                    mid.min(baseline),
                    x2 - x1,
                    (baseline - mid).abs(),
                    color,
                ));
            }
        }
        frame
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, LINE_WIDTH, stroke_color));
    }

    let radius = dataset.point_radius.unwrap_or(DEFAULT_POINT_RADIUS);
    if radius > 0.0 {
        for (x, y) in points {
            frame.rects.push(RectPrimitive::dot(x, y, radius, stroke_color));
        }
    }
    Ok(())
}

fn push_category_ticks(
    frame: &mut RenderFrame,
    labels: &[String],
    options: &AxisOptions,
    category_axis: IndexAxis,
    bands: Bands,
    area: PlotArea,
) {
    for (index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let center = bands.center(index);
        let text = match category_axis {
            IndexAxis::X => TextPrimitive::new(
                label.as_str(),
                center,
                area.bottom + FONT_SIZE_PX + 4.0,
                FONT_SIZE_PX,
                options.ticks.color,
                TextHAlign::Center,
                TextRole::Tick,
            ),
            IndexAxis::Y => TextPrimitive::new(
                label.as_str(),
                area.left - 6.0,
                center,
                FONT_SIZE_PX,
                options.ticks.color,
                TextHAlign::Right,
                TextRole::Tick,
            ),
        };
        frame.texts.push(text);
    }
}

fn push_value_ticks(
    frame: &mut RenderFrame,
    options: &AxisOptions,
    category_axis: IndexAxis,
    scale: LinearScale,
    area: PlotArea,
) -> ChartResult<()> {
    for value in scale.ticks(VALUE_TICK_COUNT) {
        let label = format_tick_value(value);
        let text = match category_axis {
            IndexAxis::X => {
                let y = scale.domain_to_pixel(value, area.bottom, area.top)?;
                TextPrimitive::new(
                    label,
                    area.left - 6.0,
                    y,
                    FONT_SIZE_PX,
                    options.ticks.color,
                    TextHAlign::Right,
                    TextRole::Tick,
                )
            }
            IndexAxis::Y => {
                let x = scale.domain_to_pixel(value, area.left, area.right)?;
                TextPrimitive::new(
                    label,
                    x,
                    area.bottom + FONT_SIZE_PX + 4.0,
                    FONT_SIZE_PX,
                    options.ticks.color,
                    TextHAlign::Center,
                    TextRole::Tick,
                )
            }
        };
        frame.texts.push(text);
    }
    Ok(())
}

fn push_axis_titles(frame: &mut RenderFrame, spec: &ChartSpec, area: PlotArea, viewport: Viewport) {
    let scales = &spec.options.scales;
    if let Some(title) = scales.x.title.as_ref().filter(|t| t.display && !t.text.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            title.text.as_str(),
            (area.left + area.right) / 2.0,
            f64::from(viewport.height) - 8.0,
            FONT_SIZE_PX,
            title.color,
            TextHAlign::Center,
            TextRole::AxisTitle,
        ));
    }
    if let Some(title) = scales.y.title.as_ref().filter(|t| t.display && !t.text.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            title.text.as_str(),
            4.0,
            area.top - 8.0,
            FONT_SIZE_PX,
            title.color,
            TextHAlign::Left,
            TextRole::AxisTitle,
        ));
    }
}

fn push_legend(frame: &mut RenderFrame, spec: &ChartSpec, area: PlotArea) {
    let legend = spec.options.plugins.legend;
    if !legend.display {
        return;
    }
    let color = legend
        .labels
        .map_or(spec.options.scales.x.ticks.color, |labels| labels.color);
    let mut x = area.right;
    for dataset in spec.data.datasets.iter().rev() {
        if dataset.label.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            dataset.label.as_str(),
            x,
            FONT_SIZE_PX + 4.0,
            FONT_SIZE_PX,
            color,
            TextHAlign::Right,
            TextRole::Legend,
        ));
        x -= dataset.label.len() as f64 * FONT_SIZE_PX * 0.6 + 16.0;
    }
}

/// Integers print without decimals, other values with up to two.
#[must_use]
pub fn format_tick_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    }
}

use inventory_charts::api::{ChartPalette, ChartPresenter, PresenterConfig};
use inventory_charts::core::{
    ActivitySeries, ItemSeries, MountPoint, ThemeMode, ThemeToggle, Viewport,
};
use inventory_charts::render::{FrameRenderer, RenderFrame, TextRole, layout_chart};
use inventory_charts::ChartError;

const SURFACES: [&str; 3] = ["popularityChart", "stockChart", "dailyActivityChart"];

fn presenter(theme: ThemeToggle) -> ChartPresenter<FrameRenderer, ThemeToggle> {
    let renderer = FrameRenderer::new(Viewport::new(800, 400), SURFACES).expect("renderer");
    ChartPresenter::new(renderer, theme, PresenterConfig::default()).expect("presenter init")
}

fn items() -> ItemSeries {
    ItemSeries::new(
        vec!["bolts".to_owned(), "nuts".to_owned(), "washers".to_owned()],
        vec![10.0, 50.0, 90.0],
    )
    .expect("valid items")
}

fn activity() -> ActivitySeries {
    ActivitySeries::new(
        vec![
            "2024-05-01".to_owned(),
            "2024-05-02".to_owned(),
            "2024-05-03".to_owned(),
        ],
        vec![3.0, 8.0, 5.0],
    )
    .expect("valid activity")
}

fn frame<'a>(renderer: &'a FrameRenderer, id: &str) -> &'a RenderFrame {
    renderer
        .frame(&MountPoint::new(id))
        .expect("frame for mounted surface")
}

#[test]
fn every_surface_gets_a_valid_frame() {
    let mut presenter = presenter(ThemeToggle::new(ThemeMode::Dark));
    presenter
        .create_charts(&items(), &activity())
        .expect("create charts");

    for id in SURFACES {
        let frame = frame(presenter.renderer(), id);
        frame.validate().expect("valid frame");
        assert!(!frame.is_empty());
    }
}

#[test]
fn bar_frames_draw_one_rect_per_item_in_item_colors() {
    let mut presenter = presenter(ThemeToggle::new(ThemeMode::Dark));
    presenter
        .create_charts(&items(), &activity())
        .expect("create charts");

    let stock = frame(presenter.renderer(), "stockChart");
    let fills: Vec<_> = stock.rects.iter().map(|r| r.fill_color).collect();
    assert_eq!(
        fills,
        vec![
            ChartPalette::STOCK_LOW,
            ChartPalette::STOCK_MEDIUM,
            ChartPalette::STOCK_HIGH,
        ]
    );
    // Vertical bars grow upwards: the tallest item has the smallest top edge.
    assert!(stock.rects[2].y < stock.rects[0].y);
    assert!(stock.rects[2].height > stock.rects[0].height);

    let popularity = frame(presenter.renderer(), "popularityChart");
    assert_eq!(popularity.rects.len(), 3);
    assert!(popularity.rects.iter().all(|r| r.fill_color == ChartPalette::POPULARITY_BAR));
    // Horizontal bars grow rightwards.
    assert!(popularity.rects[2].width > popularity.rects[0].width);
    assert_eq!(popularity.texts_with_role(TextRole::Legend).count(), 0);
}

#[test]
fn activity_frame_has_titles_legend_and_markers() {
    let mut presenter = presenter(ThemeToggle::new(ThemeMode::Dark));
    presenter
        .create_charts(&items(), &activity())
        .expect("create charts");

    let activity_frame = frame(presenter.renderer(), "dailyActivityChart");
    let titles: Vec<_> = activity_frame
        .texts_with_role(TextRole::AxisTitle)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(titles, vec!["Date", "Items Added/Removed"]);
    let legend: Vec<_> = activity_frame
        .texts_with_role(TextRole::Legend)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(legend, vec!["Daily Activity"]);

    // Two axes plus two segments between three points.
    assert_eq!(activity_frame.lines.len(), 4);
    let markers = activity_frame
        .rects
        .iter()
        .filter(|r| r.corner_radius > 0.0)
        .count();
    assert_eq!(markers, 3);
}

#[test]
fn restyle_recolors_text_but_keeps_geometry() {
    let toggle = ThemeToggle::new(ThemeMode::Dark);
    let mut presenter = presenter(toggle.clone());
    let mut registry = presenter
        .create_charts(&items(), &activity())
        .expect("create charts");
    let before: Vec<RenderFrame> = SURFACES
        .iter()
        .map(|id| frame(presenter.renderer(), id).clone())
        .collect();

    toggle.toggle();
    presenter
        .update_chart_colors(&mut registry)
        .expect("restyle");

    for (id, old) in SURFACES.iter().zip(&before) {
        let new = frame(presenter.renderer(), id);
        assert_eq!(old.rects, new.rects, "geometry of {id} must not change");
        assert_eq!(old.lines, new.lines);
        assert!(old.texts.iter().all(|t| t.color == ChartPalette::DARK_TEXT));
        assert!(new.texts.iter().all(|t| t.color == ChartPalette::LIGHT_TEXT));
        let old_labels: Vec<_> = old.texts.iter().map(|t| &t.text).collect();
        let new_labels: Vec<_> = new.texts.iter().map(|t| &t.text).collect();
        assert_eq!(old_labels, new_labels);
    }
}

#[test]
fn empty_series_still_lay_out_axes() {
    let mut presenter = presenter(ThemeToggle::new(ThemeMode::Light));
    presenter
        .create_charts(&ItemSeries::default(), &ActivitySeries::default())
        .expect("create charts");

    let stock = frame(presenter.renderer(), "stockChart");
    assert!(stock.rects.is_empty());
    assert_eq!(stock.lines.len(), 2);
    let ticks: Vec<_> = stock
        .texts_with_role(TextRole::Tick)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(ticks, vec!["0", "0.25", "0.5", "0.75", "1"]);
}

#[test]
fn too_small_viewport_is_rejected_by_layout() {
    let spec = inventory_charts::api::popularity_chart_spec(
        &items(),
        &ChartPalette::default(),
        ChartPalette::DARK_TEXT,
    );
    let err = layout_chart(&spec, Viewport::new(40, 40)).expect_err("viewport too small");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn redraw_of_unmounted_surface_fails() {
    use inventory_charts::render::Renderer;

    let mut renderer = FrameRenderer::new(Viewport::new(800, 400), SURFACES).expect("renderer");
    let spec = inventory_charts::api::popularity_chart_spec(
        &items(),
        &ChartPalette::default(),
        ChartPalette::DARK_TEXT,
    );
    let err = renderer
        .redraw(&MountPoint::new("popularityChart"), &spec)
        .expect_err("not mounted");
    assert!(matches!(err, ChartError::NotMounted(_)));
}

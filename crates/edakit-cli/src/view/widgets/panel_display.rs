use edakit_analysis::figure::{Bar, BoxplotPanel, Panel, PanelKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

/// Sample points drawn per histogram bar so bars render filled.
const BAR_RESOLUTION: u32 = 8;

/// Draws one figure panel as a bordered chart.
#[derive(Debug)]
pub struct PanelDisplay<'a> {
    panel: &'a Panel,
}

impl<'a> PanelDisplay<'a> {
    pub fn new(panel: &'a Panel) -> Self {
        Self { panel }
    }
}

impl Widget for PanelDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let panel = self.panel;
        let block = Block::bordered().title(panel.title.as_str());

        match &panel.kind {
            PanelKind::DensityHistogram { bars, kde } => {
                let bar_points = bar_points(bars);
                let x_bounds = bounds(bar_points.iter().chain(kde).map(|&(x, _)| x));
                let y_bounds = [0.0, max_height(bar_points.iter().chain(kde))];
                let datasets = vec![
                    Dataset::default()
                        .marker(Marker::Braille)
                        .graph_type(GraphType::Bar)
                        .style(Style::default().fg(Color::Cyan))
                        .data(&bar_points),
                    Dataset::default()
                        .name("KDE")
                        .marker(Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(Color::Yellow))
                        .data(kde),
                ];
                render_chart(block, datasets, panel, x_bounds, y_bounds, area, buf);
            }
            PanelKind::QqPlot { points, fit } => {
                let x_bounds = bounds(points.iter().map(|&(x, _)| x));
                let y_bounds = bounds(points.iter().chain(fit).map(|&(_, y)| y));
                let datasets = vec![
                    Dataset::default()
                        .marker(Marker::Dot)
                        .graph_type(GraphType::Scatter)
                        .style(Style::default().fg(Color::Cyan))
                        .data(points),
                    Dataset::default()
                        .marker(Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(Color::Red))
                        .data(fit),
                ];
                render_chart(block, datasets, panel, x_bounds, y_bounds, area, buf);
            }
            PanelKind::CountHistogram { bars } => {
                let bar_points = bar_points(bars);
                let x_bounds = bounds(bar_points.iter().map(|&(x, _)| x));
                let y_bounds = [0.0, max_height(&bar_points)];
                let datasets = vec![
                    Dataset::default()
                        .marker(Marker::Braille)
                        .graph_type(GraphType::Bar)
                        .style(Style::default().fg(Color::Cyan))
                        .data(&bar_points),
                ];
                render_chart(block, datasets, panel, x_bounds, y_bounds, area, buf);
            }
            PanelKind::Boxplot(boxplot) => {
                let shapes = boxplot_shapes(boxplot);
                let x_bounds = bounds(shapes.iter().flatten().map(|&(x, _)| x));
                let mut datasets = shapes
                    .iter()
                    .map(|shape| {
                        Dataset::default()
                            .marker(Marker::Braille)
                            .graph_type(GraphType::Line)
                            .style(Style::default().fg(Color::Cyan))
                            .data(shape)
                    })
                    .collect::<Vec<_>>();
                let outliers = boxplot
                    .outliers
                    .iter()
                    .map(|&x| (x, 0.5))
                    .collect::<Vec<_>>();
                datasets.push(
                    Dataset::default()
                        .marker(Marker::Dot)
                        .graph_type(GraphType::Scatter)
                        .style(Style::default().fg(Color::Red))
                        .data(&outliers),
                );
                render_chart(block, datasets, panel, x_bounds, [0.0, 1.0], area, buf);
            }
        }
    }
}

fn render_chart(
    block: Block<'_>,
    datasets: Vec<Dataset<'_>>,
    panel: &Panel,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    area: Rect,
    buf: &mut Buffer,
) {
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(axis(&panel.x_label, x_bounds))
        .y_axis(axis(&panel.y_label, y_bounds));
    Widget::render(chart, area, buf);
}

fn axis(title: &str, bounds: [f64; 2]) -> Axis<'_> {
    Axis::default().title(title).bounds(bounds).labels([
        format!("{:.2}", bounds[0]),
        format!("{:.2}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.2}", bounds[1]),
    ])
}

/// Evenly spaced points across each bar at the bar's height.
fn bar_points(bars: &[Bar]) -> Vec<(f64, f64)> {
    bars.iter()
        .flat_map(|bar| {
            let step = (bar.end - bar.start) / f64::from(BAR_RESOLUTION);
            (0..BAR_RESOLUTION).map(move |i| (bar.start + step * f64::from(i), bar.height))
        })
        .collect()
}

/// Box outline, median, and the two whiskers as polylines on a unit-high canvas.
fn boxplot_shapes(boxplot: &BoxplotPanel) -> [Vec<(f64, f64)>; 4] {
    let BoxplotPanel {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        ..
    } = *boxplot;
    [
        vec![(q1, 0.25), (q3, 0.25), (q3, 0.75), (q1, 0.75), (q1, 0.25)],
        vec![(median, 0.25), (median, 0.75)],
        vec![(lower_whisker, 0.5), (q1, 0.5)],
        vec![(q3, 0.5), (upper_whisker, 0.5)],
    ]
}

fn bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if min > max {
        return [0.0, 1.0];
    }
    if max - min < f64::EPSILON {
        return [min - 0.5, max + 0.5];
    }
    [min, max]
}

fn max_height<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a (f64, f64)>,
{
    points
        .into_iter()
        .map(|&(_, y)| y)
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max)
        .max(f64::EPSILON)
}

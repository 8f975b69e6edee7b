//! Chart descriptions returned by the analysis helpers.
//!
//! A [`Figure`] is a grid of [`Panel`]s laid out row by row. Figures hold
//! plain data only; drawing them is left to the caller (the `edakit` binary
//! renders them in the terminal).

use edakit_stats::{
    boxplot::BoxplotSummary,
    histogram::Histogram,
    kde::GaussianKde,
    probplot::ProbabilityPlot,
};
use serde::Serialize;

/// Number of points the KDE overlay is evaluated on.
const KDE_POINTS: usize = 200;

/// A grid of chart panels with an optional overall title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: Option<String>,
    pub rows: usize,
    pub columns: usize,
    /// Panels in row-major order.
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Creates a figure from panels in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the number of panels does not fill the grid.
    #[must_use]
    pub fn grid(title: Option<String>, rows: usize, columns: usize, panels: Vec<Panel>) -> Self {
        assert_eq!(
            panels.len(),
            rows * columns,
            "a {rows}x{columns} figure needs {} panels",
            rows * columns
        );
        Self {
            title,
            rows,
            columns,
            panels,
        }
    }

    /// Returns the panel at the given grid position.
    #[must_use]
    pub fn panel(&self, row: usize, column: usize) -> Option<&Panel> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.panels.get(row * self.columns + column)
    }
}

/// A single chart within a figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: PanelKind,
}

/// What a panel draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelKind {
    /// Histogram normalized to unit area with a kernel density curve on top.
    DensityHistogram {
        bars: Vec<Bar>,
        kde: Vec<(f64, f64)>,
    },
    /// Ordered sample values against normal quantiles, with the fitted line.
    QqPlot {
        points: Vec<(f64, f64)>,
        fit: [(f64, f64); 2],
    },
    /// Histogram of raw counts.
    CountHistogram { bars: Vec<Bar> },
    /// Horizontal box-and-whisker plot.
    Boxplot(BoxplotPanel),
}

/// One histogram bar spanning `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub start: f64,
    pub end: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxplotPanel {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl From<&BoxplotSummary> for BoxplotPanel {
    fn from(summary: &BoxplotSummary) -> Self {
        Self {
            lower_whisker: summary.lower_whisker,
            q1: summary.quartiles.q1,
            median: summary.quartiles.median,
            q3: summary.quartiles.q3,
            upper_whisker: summary.upper_whisker,
            outliers: summary.outliers.clone(),
        }
    }
}

impl Panel {
    /// Density histogram with a KDE overlay spanning three bandwidths past the data.
    ///
    /// The KDE curve is omitted when the sample is too small or constant.
    pub(crate) fn density_histogram(
        title: impl Into<String>,
        histogram: &Histogram,
        kde: Option<&GaussianKde>,
    ) -> Self {
        let bars = histogram
            .bins
            .iter()
            .zip(histogram.densities())
            .map(|(bin, density)| Bar {
                start: bin.range.start,
                end: bin.range.end,
                height: density,
            })
            .collect::<Vec<_>>();
        let kde = match (kde, bars.first(), bars.last()) {
            (Some(kde), Some(first), Some(last)) => {
                let margin = 3.0 * kde.bandwidth();
                kde.curve(first.start - margin, last.end + margin, KDE_POINTS)
            }
            _ => vec![],
        };
        Self {
            title: title.into(),
            x_label: "Value".to_owned(),
            y_label: "Density".to_owned(),
            kind: PanelKind::DensityHistogram { bars, kde },
        }
    }

    pub(crate) fn qq_plot(title: impl Into<String>, plot: &ProbabilityPlot) -> Self {
        let points = plot.points().collect::<Vec<_>>();
        let (x_min, x_max) = (
            plot.theoretical.first().copied().unwrap_or(0.0),
            plot.theoretical.last().copied().unwrap_or(0.0),
        );
        Self {
            title: title.into(),
            x_label: "Theoretical quantiles".to_owned(),
            y_label: "Ordered values".to_owned(),
            kind: PanelKind::QqPlot {
                points,
                fit: [(x_min, plot.fitted(x_min)), (x_max, plot.fitted(x_max))],
            },
        }
    }

    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn count_histogram(x_label: impl Into<String>, histogram: &Histogram) -> Self {
        let bars = histogram
            .bins
            .iter()
            .map(|bin| Bar {
                start: bin.range.start,
                end: bin.range.end,
                height: bin.count as f64,
            })
            .collect();
        Self {
            title: String::new(),
            x_label: x_label.into(),
            y_label: "Count".to_owned(),
            kind: PanelKind::CountHistogram { bars },
        }
    }

    pub(crate) fn boxplot(x_label: impl Into<String>, summary: &BoxplotSummary) -> Self {
        Self {
            title: String::new(),
            x_label: x_label.into(),
            y_label: String::new(),
            kind: PanelKind::Boxplot(summary.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use edakit_stats::histogram::BinRule;

    use super::*;

    #[test]
    fn test_panel_lookup_is_row_major() {
        let histogram = Histogram::new(&[1.0, 2.0, 3.0], BinRule::Fixed(2)).unwrap();
        let summary = BoxplotSummary::new(&[1.0, 2.0, 3.0]).unwrap();
        let figure = Figure::grid(
            None,
            2,
            1,
            vec![
                Panel::count_histogram("x", &histogram),
                Panel::boxplot("x", &summary),
            ],
        );
        assert!(matches!(
            figure.panel(0, 0).map(|p| &p.kind),
            Some(PanelKind::CountHistogram { .. })
        ));
        assert!(matches!(
            figure.panel(1, 0).map(|p| &p.kind),
            Some(PanelKind::Boxplot(_))
        ));
        assert!(figure.panel(0, 1).is_none());
        assert!(figure.panel(2, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "needs 2 panels")]
    fn test_grid_requires_full_panels() {
        let _ = Figure::grid(None, 1, 2, vec![]);
    }

    #[test]
    fn test_density_histogram_without_kde() {
        let histogram = Histogram::new(&[4.0], BinRule::Auto).unwrap();
        let panel = Panel::density_histogram("h", &histogram, None);
        let PanelKind::DensityHistogram { bars, kde } = panel.kind else {
            panic!("unexpected panel kind");
        };
        assert_eq!(bars.len(), 1);
        assert!((bars[0].height - 1.0).abs() < 1e-12);
        assert!(kde.is_empty());
    }

    #[test]
    fn test_serializes_panel_type_tag() {
        let summary = BoxplotSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let json = serde_json::to_value(Panel::boxplot("x", &summary)).unwrap();
        assert_eq!(json["kind"]["type"], "boxplot");
        assert_eq!(json["kind"]["median"], 3.0);
    }
}

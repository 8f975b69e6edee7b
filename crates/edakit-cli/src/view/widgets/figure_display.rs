use edakit_analysis::figure::Figure;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Stylize as _,
    text::Line,
    widgets::Widget,
};

use crate::view::widgets::PanelDisplay;

/// Lays out the panels of a figure in its grid, below the optional title.
#[derive(Debug)]
pub struct FigureDisplay<'a> {
    figure: &'a Figure,
}

impl<'a> FigureDisplay<'a> {
    pub fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }
}

impl Widget for FigureDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let figure = self.figure;
        let grid_area = match &figure.title {
            Some(title) => {
                let [title_area, grid_area] =
                    Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
                Line::from(title.as_str()).bold().centered().render(title_area, buf);
                grid_area
            }
            None => area,
        };

        let rows = Layout::vertical(vec![Constraint::Fill(1); figure.rows]).split(grid_area);
        for (row, row_area) in rows.iter().enumerate() {
            let columns =
                Layout::horizontal(vec![Constraint::Fill(1); figure.columns]).split(*row_area);
            for (column, cell_area) in columns.iter().enumerate() {
                if let Some(panel) = figure.panel(row, column) {
                    PanelDisplay::new(panel).render(*cell_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use edakit_analysis::{describe::DistributionDescription, normality::NormalityCheck};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::view::widgets::buffer_text;

    const SAMPLE: [f64; 12] = [4.9, 5.1, 5.0, 4.8, 5.3, 4.7, 5.2, 5.0, 4.9, 5.1, 5.4, 4.6];

    #[test]
    fn test_normality_figure_panels_side_by_side() {
        let report = NormalityCheck::default().run(&SAMPLE).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(FigureDisplay::new(&report.figure), frame.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let first_line = text.lines().next().unwrap();
        let histogram = first_line.find("Histogram with KDE").unwrap();
        let qq = first_line.find("Q-Q Plot").unwrap();
        assert!(histogram < qq);
    }

    #[test]
    fn test_describe_figure_title_and_stacked_panels() {
        let description = DistributionDescription::new("height", &SAMPLE).unwrap();
        let area = Rect::new(0, 0, 60, 21);
        let mut buf = Buffer::empty(area);
        FigureDisplay::new(&description.figure).render(area, &mut buf);

        let text = buffer_text(&buf);
        let lines = text.lines().collect::<Vec<_>>();
        assert!(lines[0].contains("Distribution of 'height'"));
        // Two bordered panels stacked below the title
        let top_borders = lines.iter().filter(|line| line.starts_with('┌')).count();
        assert_eq!(top_borders, 2);
    }
}

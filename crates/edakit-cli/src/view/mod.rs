use crossterm::event::{self, KeyCode};
use edakit_analysis::figure::Figure;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use self::widgets::FigureDisplay;

mod widgets;

/// Shows `figure` full screen until `q` or `Esc` is pressed.
pub fn show_figure(figure: &Figure) -> anyhow::Result<()> {
    ratatui::run(|terminal| {
        loop {
            terminal.draw(|frame| {
                let [main_area, help_area] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                        .areas(frame.area());
                let help_text = Text::from("q/Esc: Quit")
                    .style(Style::default().fg(Color::DarkGray))
                    .centered();
                frame.render_widget(FigureDisplay::new(figure), main_area);
                frame.render_widget(help_text, help_area);
            })?;

            if let Some(key) = event::read()?.as_key_press_event()
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                break;
            }
        }
        Ok(())
    })
}

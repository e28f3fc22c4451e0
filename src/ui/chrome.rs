use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;

pub(crate) const TITLE: &str = "Analytics Dashboard";
const SUBTITLE: &str =
    "Track user interactions in real-time with our advanced clickstream analytics platform";
const HINT: &str = "Click any button to see the magic happen";
pub(crate) const FOOTER: &str = "Powered by advanced analytics • Real-time tracking • Secure & Private";

pub fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        Line::default(),
        Line::from(Span::styled(
            format!("➜ {HINT}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

pub fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let footer = Paragraph::new(FOOTER)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

pub fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &AppState, busy: bool, collector: &str) {
    let state = if busy { "RECORDING" } else { "IDLE" };
    let command_id = app
        .status
        .last_action_id
        .map(|id| id.as_str())
        .unwrap_or("-");
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };

    let status_text = format!(
        "{state} | focus {} | cmd={command_id} | {message} | collector={collector} | 1-3 click · tab focus · q quit",
        app.focused.label()
    );
    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

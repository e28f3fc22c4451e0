use chrono::{DateTime, Local, TimeZone, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::recorder::{ClickEvent, RecentClicks};

use super::cards::page_color;

pub(crate) const ACTIVITY_TITLE: &str = " Recent Activity ";

pub fn format_clock<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%H:%M:%S").to_string()
}

/// Left and right halves of one panel row, before padding.
pub fn activity_row_parts<Tz>(event: &ClickEvent, tz: &Tz) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let left = format!("● {}", event.page().label());
    let right = format!(
        "{}  ID: {}",
        format_clock(event.timestamp(), tz),
        event.short_session_id()
    );
    (left, right)
}

pub fn draw_activity_panel(frame: &mut Frame<'_>, area: Rect, recent: &RecentClicks) {
    if recent.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(ACTIVITY_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line<'_>> = recent
        .iter()
        .map(|event| {
            let (left, right) = activity_row_parts(event, &Local);
            let used = left.width() + right.width() + 2;
            let gap = width.saturating_sub(used).max(1);
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    left,
                    Style::default()
                        .fg(page_color(event.page()))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(gap)),
                Span::styled(right, Style::default().fg(Color::Gray)),
                Span::raw(" "),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

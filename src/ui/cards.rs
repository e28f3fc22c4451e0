use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::recorder::PageId;

use super::overlay::draw_loading_overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardsView {
    pub focused: PageId,
    pub busy: bool,
    pub spinner_frame: usize,
}

pub(crate) fn page_color(page: PageId) -> Color {
    match page {
        PageId::Home => Color::Blue,
        PageId::About => Color::Magenta,
        PageId::Contact => Color::Green,
    }
}

pub fn draw_cards(frame: &mut Frame<'_>, cards: [Rect; 3], view: CardsView) {
    for (page, area) in PageId::ALL.into_iter().zip(cards) {
        draw_card(frame, area, page, view);
    }
}

fn draw_card(frame: &mut Frame<'_>, area: Rect, page: PageId, view: CardsView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let color = page_color(page);
    let focused = view.focused == page;
    let border_style = match (view.busy, focused) {
        (true, _) => Style::default().fg(Color::DarkGray),
        (false, true) => Style::default().fg(color).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(color),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style)
        .title(format!(" {} ", page.index() + 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = if view.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    let lines = vec![
        Line::from(Span::styled(
            page.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(page.description(), text_style)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );

    if view.busy {
        draw_loading_overlay(frame, inner, view.spinner_frame);
    }
}

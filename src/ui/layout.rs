use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::recorder::PageId;

pub(crate) const HEADER_HEIGHT: u16 = 4;
pub(crate) const CARD_HEIGHT: u16 = 7;
const CARD_ROW_MAX_WIDTH: u16 = 96;
const ACTIVITY_MAX_WIDTH: u16 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub cards: [Rect; 3],
    pub activity: Rect,
    pub footer: Rect,
    pub status: Rect,
}

impl UiLayout {
    pub fn card_at(&self, position: Position) -> Option<PageId> {
        self.cards
            .iter()
            .position(|card| card.contains(position))
            .and_then(PageId::from_index)
    }
}

/// `activity_rows` is the number of buffered clicks; the panel collapses
/// to zero height when there are none.
pub fn split_layout(area: Rect, activity_rows: usize) -> UiLayout {
    let activity_height = if activity_rows == 0 {
        0
    } else {
        activity_rows as u16 + 2
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(activity_height),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let card_row = centered_columns(chunks[2], CARD_ROW_MAX_WIDTH);
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(2)
        .split(card_row);

    UiLayout {
        header: chunks[0],
        cards: [card_chunks[0], card_chunks[1], card_chunks[2]],
        activity: centered_columns(chunks[4], ACTIVITY_MAX_WIDTH),
        footer: chunks[6],
        status: chunks[7],
    }
}

fn centered_columns(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

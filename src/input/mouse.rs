use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::command::Command;
use crate::ui::split_layout;

/// Left press on a card records its page. Everything else is ignored.
pub fn map_mouse_to_command(mouse: MouseEvent, area: Rect, activity_rows: usize) -> Option<Command> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    let layout = split_layout(area, activity_rows);
    layout
        .card_at(Position::new(mouse.column, mouse.row))
        .map(|page| Command::Record { page })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use super::map_mouse_to_command;
    use crate::command::Command;
    use crate::recorder::PageId;
    use crate::ui::split_layout;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_press_inside_card_records_its_page() {
        let area = Rect::new(0, 0, 90, 30);
        let layout = split_layout(area, 0);
        for page in PageId::ALL {
            let card = layout.cards[page.index()];
            let press = mouse(
                MouseEventKind::Down(MouseButton::Left),
                card.x + card.width / 2,
                card.y + card.height / 2,
            );
            assert_eq!(
                map_mouse_to_command(press, area, 0),
                Some(Command::Record { page })
            );
        }
    }

    #[test]
    fn other_buttons_and_misses_are_ignored() {
        let area = Rect::new(0, 0, 90, 30);
        let layout = split_layout(area, 0);
        let card = layout.cards[0];

        let right = mouse(MouseEventKind::Down(MouseButton::Right), card.x, card.y);
        assert_eq!(map_mouse_to_command(right, area, 0), None);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), card.x, card.y);
        assert_eq!(map_mouse_to_command(up, area, 0), None);

        let header = mouse(MouseEventKind::Down(MouseButton::Left), 1, 0);
        assert_eq!(map_mouse_to_command(header, area, 0), None);
    }
}

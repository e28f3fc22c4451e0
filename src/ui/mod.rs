mod activity;
mod cards;
mod chrome;
mod layout;
mod overlay;

pub use activity::{activity_row_parts, draw_activity_panel, format_clock};
pub use cards::{CardsView, draw_cards};
pub use chrome::{draw_footer, draw_header, draw_status};
pub use layout::{UiLayout, split_layout};
pub use overlay::{draw_loading_overlay, spinner_glyph};

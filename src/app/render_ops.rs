use ratatui::Frame;

use crate::error::AppResult;
use crate::recorder::ClickRecorder;
use crate::ui::{
    CardsView, draw_activity_panel, draw_cards, draw_footer, draw_header, draw_status,
    split_layout,
};

use super::core::App;
use super::state::AppState;
use super::terminal_session::TerminalSurface;

pub(crate) fn draw_dashboard(
    frame: &mut Frame<'_>,
    state: &AppState,
    recorder: &ClickRecorder,
    spinner_frame: usize,
) {
    let layout = split_layout(frame.area(), recorder.recent().len());
    let busy = recorder.is_busy();

    draw_header(frame, layout.header);
    draw_cards(
        frame,
        layout.cards,
        CardsView {
            focused: state.focused,
            busy,
            spinner_frame,
        },
    );
    draw_activity_panel(frame, layout.activity, recorder.recent());
    draw_footer(frame, layout.footer);
    draw_status(
        frame,
        layout.status,
        state,
        busy,
        recorder.dispatcher().collector_name(),
    );
}

impl App {
    pub(crate) fn render_frame(
        &self,
        session: &mut impl TerminalSurface,
        spinner_frame: usize,
    ) -> AppResult<()> {
        session.draw(|frame| draw_dashboard(frame, &self.state, &self.recorder, spinner_frame))?;
        Ok(())
    }
}

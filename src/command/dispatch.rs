use std::time::Instant;

use crate::app::AppState;
use crate::recorder::{ClickRecorder, PageId};

use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone, Copy)]
pub struct DispatchContext {
    pub now: Instant,
    pub ignore_while_busy: bool,
}

pub fn dispatch(
    app: &mut AppState,
    recorder: &mut ClickRecorder,
    cmd: Command,
    ctx: DispatchContext,
) -> CommandOutcome {
    let action_id = cmd.action_id();
    let focused = app.focused;
    let outcome = match cmd {
        Command::Record { page } => record(app, recorder, page, ctx),
        Command::ActivateFocused => record(app, recorder, focused, ctx),
        Command::FocusNext => focus(app, focused.next()),
        Command::FocusPrev => focus(app, focused.prev()),
        Command::Quit => CommandOutcome::QuitRequested,
    };
    app.status.last_action_id = Some(action_id);
    outcome
}

fn record(
    app: &mut AppState,
    recorder: &mut ClickRecorder,
    page: PageId,
    ctx: DispatchContext,
) -> CommandOutcome {
    if ctx.ignore_while_busy && recorder.is_busy() {
        tracing::trace!(page = page.id(), "click ignored while busy");
        return CommandOutcome::Ignored;
    }

    app.focused = page;
    let event = recorder.record_click(page, ctx.now);
    tracing::debug!(
        page = page.id(),
        session_id = event.session_id(),
        timestamp = %event.timestamp_iso(),
        "click recorded"
    );
    app.status.message = format!("recorded {}", page.label());
    CommandOutcome::Applied
}

fn focus(app: &mut AppState, page: PageId) -> CommandOutcome {
    app.focused = page;
    app.status.message = format!("focus {}", page.label());
    CommandOutcome::Applied
}

use std::time::{Duration, Instant};

use tokio::time::{self, MissedTickBehavior};

use crate::command::{ActionId, Command, CommandOutcome, DispatchContext, dispatch};
use crate::error::AppResult;
use crate::event::DomainEvent;

use super::actors::UiActor;
use super::core::App;
use super::event_bus::EventBus;
use super::terminal_session::TerminalSession;

struct LoopRuntime {
    ui_actor: UiActor,
    session: TerminalSession,
    spinner_tick: time::Interval,
    bus: EventBus,
}

enum WaitEvent {
    Event(DomainEvent),
    BusyDeadline,
    SpinnerTick,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        tracing::info!(
            collector = self.recorder.dispatcher().collector_name(),
            feedback_ms = self.config.recorder.busy_feedback_ms,
            "dashboard started"
        );

        loop {
            if self.recorder.poll_busy(Instant::now()) {
                runtime.ui_actor.mark_redraw();
            }
            if runtime.ui_actor.needs_redraw() {
                self.render_frame(&mut runtime.session, runtime.ui_actor.spinner_frame())?;
                runtime.ui_actor.clear_redraw();
            }

            let waited = wait_next_event(
                &mut runtime.bus,
                self.recorder.next_busy_deadline(),
                &mut runtime.spinner_tick,
                self.recorder.is_busy(),
            )
            .await;
            if self.handle_waited_event(waited, &mut runtime)? == LoopControl::Break {
                break;
            }
        }

        runtime.bus.shutdown();
        runtime.session.restore()?;
        tracing::info!(recorded = self.recorder.recent().len(), "dashboard stopped");
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let bus = EventBus::spawn();
        let mut spinner_tick =
            time::interval(Duration::from_millis(self.config.ui.spinner_tick_ms));
        spinner_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            ui_actor: UiActor::new(),
            session,
            spinner_tick,
            bus,
        })
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_input_event(
                    event,
                    &mut runtime.session,
                    runtime.ui_actor.needs_redraw_mut(),
                )?;
                if outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if let Some(command) = outcome.command {
                    let _ = runtime.bus.sender().send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                if self.apply_command(command, Instant::now()) == LoopControl::Break {
                    return Ok(LoopControl::Break);
                }
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::BusyDeadline => {
                if self.recorder.poll_busy(Instant::now()) {
                    runtime.ui_actor.mark_redraw();
                }
            }
            WaitEvent::SpinnerTick => {
                if self.recorder.is_busy() {
                    runtime.ui_actor.advance_spinner();
                }
            }
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }

    pub(crate) fn apply_command(&mut self, command: Command, now: Instant) -> LoopControl {
        let outcome = dispatch(
            &mut self.state,
            &mut self.recorder,
            command,
            DispatchContext {
                now,
                ignore_while_busy: self.config.input.ignore_while_busy,
            },
        );
        match outcome {
            CommandOutcome::QuitRequested => LoopControl::Break,
            CommandOutcome::Applied | CommandOutcome::Ignored => LoopControl::Continue,
        }
    }
}

async fn wait_next_event(
    bus: &mut EventBus,
    busy_deadline: Option<Instant>,
    spinner_tick: &mut time::Interval,
    spinning: bool,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_event = bus.receiver_mut().recv() => {
            match maybe_event {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = sleep_until_deadline(busy_deadline) => WaitEvent::BusyDeadline,
        _ = spinner_tick.tick(), if spinning => WaitEvent::SpinnerTick,
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

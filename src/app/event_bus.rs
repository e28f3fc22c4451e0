use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

/// Single queue feeding the event loop. Input is read on its own task so the
/// loop can also wait on timers.
pub(crate) struct EventBus {
    tx: UnboundedSender<DomainEvent>,
    rx: UnboundedReceiver<DomainEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl EventBus {
    pub(crate) fn spawn() -> Self {
        let (tx, rx) = unbounded_channel();
        let tasks = vec![spawn_input_task(tx.clone())];
        Self { tx, rx, tasks }
    }

    pub(crate) fn sender(&self) -> &UnboundedSender<DomainEvent> {
        &self.tx
    }

    pub(crate) fn receiver_mut(&mut self) -> &mut UnboundedReceiver<DomainEvent> {
        &mut self.rx
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for EventBus {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn is_forwarded(event: &Event) -> bool {
    matches!(event, Event::Key(_) | Event::Mouse(_) | Event::Resize(_, _))
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) if is_forwarded(&event) => DomainEvent::Input(event),
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(error = %err, "terminal input error");
                    DomainEvent::InputError(err.to_string())
                }
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
        tracing::debug!("terminal input stream ended");
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::is_forwarded;

    #[test]
    fn only_key_mouse_and_resize_events_are_forwarded() {
        let key = Event::Key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
        assert!(is_forwarded(&key));
        assert!(is_forwarded(&Event::Resize(80, 24)));
        assert!(!is_forwarded(&Event::FocusGained));
        assert!(!is_forwarded(&Event::Paste("x".to_string())));
    }
}

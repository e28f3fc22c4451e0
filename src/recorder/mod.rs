mod buffer;
mod busy;
mod dispatch;
mod event;
mod page;

use std::time::{Duration, Instant};

pub use buffer::{RECENT_CAPACITY, RecentClicks};
pub use busy::{BusyIndicator, DEFAULT_FEEDBACK};
pub use dispatch::{Collector, ConsoleCollector, Dispatcher, NullCollector};
pub use event::{ClickEvent, SESSION_ID_DISPLAY_LEN, SESSION_ID_LEN, generate_session_id};
pub use page::PageId;

/// Captures clicks into the recency buffer and hands them to the dispatcher.
#[derive(Debug, Default)]
pub struct ClickRecorder {
    recent: RecentClicks,
    busy: BusyIndicator,
    dispatcher: Dispatcher,
}

impl ClickRecorder {
    pub fn new(feedback: Duration, dispatcher: Dispatcher) -> Self {
        Self {
            recent: RecentClicks::default(),
            busy: BusyIndicator::new(feedback),
            dispatcher,
        }
    }

    /// Records a press on `page`. Never fails; dispatch runs detached.
    pub fn record_click(&mut self, page: PageId, now: Instant) -> &ClickEvent {
        self.busy.poll(now);
        self.busy.begin(now);

        let event = ClickEvent::capture(page);
        self.dispatcher.dispatch(event.clone());
        self.recent.push(event)
    }

    /// Advances the feedback timers. Returns whether the busy flag changed.
    pub fn poll_busy(&mut self, now: Instant) -> bool {
        self.busy.poll(now)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn next_busy_deadline(&self) -> Option<Instant> {
        self.busy.next_deadline()
    }

    pub fn recent(&self) -> &RecentClicks {
        &self.recent
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use async_trait::async_trait;

    use super::{ClickEvent, ClickRecorder, Collector, Dispatcher, PageId, RECENT_CAPACITY};
    use crate::error::DispatchError;

    struct RefusingCollector;

    #[async_trait]
    impl Collector for RefusingCollector {
        fn name(&self) -> &'static str {
            "refusing"
        }

        async fn collect(&self, _event: &ClickEvent) -> Result<(), DispatchError> {
            Err(DispatchError::rejected("refusing", "offline"))
        }
    }

    #[test]
    fn record_click_prepends_and_bounds_buffer() {
        let mut recorder = ClickRecorder::default();
        let now = Instant::now();
        let pages = [
            PageId::Home,
            PageId::About,
            PageId::Contact,
            PageId::Home,
            PageId::About,
            PageId::Contact,
        ];

        let mut first_session = String::new();
        for (i, page) in pages.into_iter().enumerate() {
            let recorded = recorder.record_click(page, now).clone();
            if i == 0 {
                first_session = recorded.session_id().to_string();
            }
            assert_eq!(recorder.recent().latest(), Some(&recorded));
            assert_eq!(recorder.recent().len(), (i + 1).min(RECENT_CAPACITY));
        }

        let order: Vec<_> = recorder.recent().iter().map(ClickEvent::page).collect();
        assert_eq!(
            order,
            vec![
                PageId::Contact,
                PageId::About,
                PageId::Home,
                PageId::Contact,
                PageId::About
            ]
        );
        assert!(
            recorder
                .recent()
                .iter()
                .all(|event| event.session_id() != first_session)
        );
    }

    #[test]
    fn busy_flag_follows_feedback_interval() {
        let mut recorder = ClickRecorder::new(Duration::from_millis(300), Dispatcher::default());
        let start = Instant::now();

        recorder.record_click(PageId::Home, start);
        assert!(recorder.is_busy());
        assert_eq!(
            recorder.next_busy_deadline(),
            Some(start + Duration::from_millis(300))
        );

        assert!(!recorder.poll_busy(start + Duration::from_millis(100)));
        assert!(recorder.poll_busy(start + Duration::from_millis(300)));
        assert!(!recorder.is_busy());
    }

    #[tokio::test]
    async fn collector_failure_does_not_touch_recorder_state() {
        let dispatcher = Dispatcher::new(Arc::new(RefusingCollector));
        let mut recorder = ClickRecorder::new(Duration::from_millis(300), dispatcher);
        let start = Instant::now();

        for page in PageId::ALL {
            recorder.record_click(page, start);
        }
        tokio::task::yield_now().await;

        assert_eq!(recorder.recent().len(), 3);
        assert!(recorder.is_busy());
        assert!(recorder.poll_busy(start + Duration::from_millis(300)));
    }
}

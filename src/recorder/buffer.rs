use std::collections::VecDeque;

use super::event::ClickEvent;

pub const RECENT_CAPACITY: usize = 5;

/// Most-recent-first list of the last [`RECENT_CAPACITY`] clicks.
#[derive(Debug, Default)]
pub struct RecentClicks {
    entries: VecDeque<ClickEvent>,
}

impl RecentClicks {
    /// Prepends `event`, evicting the oldest entry once full.
    pub fn push(&mut self, event: ClickEvent) -> &ClickEvent {
        self.entries.push_front(event);
        self.entries.truncate(RECENT_CAPACITY);
        &self.entries[0]
    }

    pub fn latest(&self) -> Option<&ClickEvent> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ClickEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{RECENT_CAPACITY, RecentClicks};
    use crate::recorder::{ClickEvent, PageId};

    fn nth_event(n: u32, page: PageId) -> ClickEvent {
        let at = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, n)
            .single()
            .expect("valid timestamp");
        ClickEvent::new(at, page, format!("call{n:05}"))
    }

    #[test]
    fn length_tracks_min_of_calls_and_capacity() {
        let mut recent = RecentClicks::default();
        for n in 1..=12 {
            recent.push(nth_event(n, PageId::Home));
            assert_eq!(recent.len(), (n as usize).min(RECENT_CAPACITY));
        }
    }

    #[test]
    fn entries_stay_most_recent_first() {
        let mut recent = RecentClicks::default();
        for n in 1..=8 {
            recent.push(nth_event(n, PageId::About));
            let stamps: Vec<_> = recent.iter().map(ClickEvent::timestamp).collect();
            assert!(stamps.windows(2).all(|pair| pair[0] > pair[1]));
        }
    }

    #[test]
    fn sixth_click_evicts_the_first() {
        let pages = [
            PageId::Home,
            PageId::About,
            PageId::Contact,
            PageId::Home,
            PageId::About,
            PageId::Contact,
        ];
        let mut recent = RecentClicks::default();
        for (i, page) in pages.into_iter().enumerate() {
            recent.push(nth_event(i as u32 + 1, page));
        }

        let ids: Vec<_> = recent.iter().map(|e| e.session_id().to_string()).collect();
        assert_eq!(
            ids,
            vec!["call00006", "call00005", "call00004", "call00003", "call00002"]
        );
        let order: Vec<_> = recent.iter().map(ClickEvent::page).collect();
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
        assert_eq!(
            recent.latest().map(ClickEvent::session_id),
            Some("call00006")
        );
    }
}

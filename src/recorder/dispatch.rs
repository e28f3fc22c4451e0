use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::DispatchError;

use super::event::ClickEvent;

/// Destination for recorded clicks.
#[async_trait]
pub trait Collector: Send + Sync {
    fn name(&self) -> &'static str;

    async fn collect(&self, event: &ClickEvent) -> Result<(), DispatchError>;
}

/// Writes the collector body to the log.
#[derive(Debug, Default)]
pub struct ConsoleCollector;

#[async_trait]
impl Collector for ConsoleCollector {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn collect(&self, event: &ClickEvent) -> Result<(), DispatchError> {
        let body = serde_json::to_string(event)?;
        tracing::info!(target: "clickdeck::collector", %body, "logged click");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NullCollector;

#[async_trait]
impl Collector for NullCollector {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn collect(&self, _event: &ClickEvent) -> Result<(), DispatchError> {
        Ok(())
    }
}

/// Fire-and-forget delivery of clicks to a [`Collector`].
///
/// Each click gets its own task. Failures are logged and dropped; nothing is
/// retried and nothing flows back to the caller.
#[derive(Clone)]
pub struct Dispatcher {
    collector: Arc<dyn Collector>,
}

impl Dispatcher {
    pub fn new(collector: Arc<dyn Collector>) -> Self {
        Self { collector }
    }

    pub fn collector_name(&self) -> &'static str {
        self.collector.name()
    }

    /// Spawns delivery of `event` on the current tokio runtime.
    ///
    /// Returns `None` when called outside a runtime; the click is then only
    /// logged as undelivered.
    pub fn dispatch(&self, event: ClickEvent) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(
                collector = self.collector.name(),
                page = event.page().id(),
                "no async runtime, click not dispatched"
            );
            return None;
        };

        let collector = Arc::clone(&self.collector);
        Some(handle.spawn(async move {
            match collector.collect(&event).await {
                Ok(()) => tracing::debug!(
                    collector = collector.name(),
                    page = event.page().id(),
                    "click dispatched"
                ),
                Err(err) => tracing::warn!(
                    collector = collector.name(),
                    page = event.page().id(),
                    error = %err,
                    "error logging click"
                ),
            }
        }))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleCollector))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("collector", &self.collector.name())
            .finish()
    }
}

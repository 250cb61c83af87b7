//! The alert poller behind the scrolling ticker.
//!
//! The legacy dashboard re-issued its alert fetch on a bare 5-second timer
//! that nothing ever cancelled, and overlapping polls could land out of
//! order.  Here the poll loop is a single task bound to the handle's
//! lifetime: polls run strictly one after the other, `stop()` cancels, and
//! dropping the handle aborts the task with it.
//!

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, trace};

use bousai_formats::AlertMessage;
use bousai_sources::{DocumentStore, Feed};

/// Poll period observed in the field.
pub const DEFAULT_TICK: Duration = Duration::from_secs(5);

/// Handle on the running poller.  Keep it alive as long as the view lives.
///
#[derive(Debug)]
pub struct AlertTicker {
    task: JoinHandle<()>,
    rx: watch::Receiver<Option<AlertMessage>>,
}

impl AlertTicker {
    /// Start polling `feed` every `every`.  The first poll fires immediately.
    ///
    pub fn spawn<S>(feed: Arc<Feed<S>>, every: Duration) -> Self
    where
        S: DocumentStore + 'static,
    {
        let (tx, rx) = watch::channel(None);

        let task = tokio::spawn(async move {
            let mut tick = interval(every);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tick.tick().await;
                trace!("alert poll");

                // Fail-open below us: a fetch failure is a skipped update,
                // the last good alert stays on display.
                //
                if let Some(alert) = feed.latest_alert().await {
                    debug!("latest alert: {}", alert.text);
                    if tx.send(Some(alert)).is_err() {
                        break;
                    }
                }
            }
        });

        AlertTicker { task, rx }
    }

    /// Watch side, for views that want to await changes.
    ///
    pub fn subscribe(&self) -> watch::Receiver<Option<AlertMessage>> {
        self.rx.clone()
    }

    /// Most recent alert seen so far, if any.
    ///
    pub fn latest(&self) -> Option<AlertMessage> {
        self.rx.borrow().clone()
    }

    /// Cancel the poller.
    ///
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for AlertTicker {
    /// The poller never outlives its view.
    ///
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use bousai_formats::Collection;
    use bousai_sources::StoreError;
    use serde_json::{json, Value};

    #[derive(Debug)]
    struct OneAlertStore;

    #[async_trait]
    impl DocumentStore for OneAlertStore {
        async fn get_all(&self, _c: Collection) -> Result<Vec<Value>, StoreError> {
            Ok(vec![
                json!({"id": "a1", "text": "土砂崩れに警戒してください", "createdAt": "2024-06-30T12:00:00Z"}),
            ])
        }

        async fn add(&self, _c: Collection, _d: &Value) -> Result<String, StoreError> {
            Ok("x".to_string())
        }

        async fn delete(&self, _c: Collection, _id: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_ticker_publishes_latest_alert() {
        let feed = Arc::new(Feed::new(OneAlertStore));
        let ticker = AlertTicker::spawn(feed, Duration::from_millis(10));

        let mut rx = ticker.subscribe();
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("poller never published")
            .expect("poller dropped the channel");

        let alert = ticker.latest().expect("no alert recorded");
        assert_eq!("土砂崩れに警戒してください", alert.text);

        ticker.stop();
    }

    #[tokio::test]
    async fn test_drop_aborts_the_task() {
        let feed = Arc::new(Feed::new(OneAlertStore));
        let ticker = AlertTicker::spawn(feed, Duration::from_millis(10));

        let task = ticker.task.abort_handle();
        drop(ticker);

        // Give the runtime a moment to process the abort
        //
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(task.is_finished());
    }
}

//! Handle the `alert` sub-commands: the CLI side of the broadcast ticker.
//!

use std::sync::Arc;

use eyre::Result;
use tracing::trace;

use bousai_reconciler::AlertTicker;
use bousai_sources::{DocumentStore, Feed};

use crate::WatchOpts;

/// Display the single most recent alert, like the belt does.
///
#[tracing::instrument(skip(feed))]
pub async fn show_alert<S: DocumentStore>(feed: &Feed<S>) -> Result<()> {
    match feed.latest_alert().await {
        Some(alert) => eprintln!("[{}] {}", alert.created_at.to_rfc3339(), alert.text),
        None => eprintln!("警告: データがありません"),
    }
    Ok(())
}

/// Broadcast a new alert.
///
#[tracing::instrument(skip(feed))]
pub async fn send_alert<S: DocumentStore>(feed: &Feed<S>, text: &str) -> Result<()> {
    let id = feed.send_alert(text).await?;
    eprintln!("Alert {id} sent");
    Ok(())
}

/// Retract an alert by document id.
///
#[tracing::instrument(skip(feed))]
pub async fn cancel_alert<S: DocumentStore>(feed: &Feed<S>, id: &str) -> Result<()> {
    feed.cancel_alert(id).await?;
    eprintln!("Alert {id} deleted");
    Ok(())
}

/// Keep polling like the dashboard ticker, until interrupted.  The poller is
/// cancelled on the way out, not left running.
///
#[tracing::instrument(skip(feed))]
pub async fn watch_alerts<S>(feed: &Feed<S>, wopts: &WatchOpts) -> Result<()>
where
    S: DocumentStore + Clone + 'static,
{
    trace!("watching every {}", wopts.every);

    let ticker = AlertTicker::spawn(Arc::new(feed.clone()), wopts.every.into());
    let mut rx = ticker.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                if let Some(alert) = rx.borrow_and_update().clone() {
                    eprintln!("[{}] {}", alert.created_at.to_rfc3339(), alert.text);
                }
            }
        }
    }

    ticker.stop();
    Ok(())
}

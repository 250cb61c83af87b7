//! The typed feed over the raw document store, one getter per record class.
//!
//! Read failures never cross this boundary: a fetch that errors out is logged
//! and becomes an empty list, so the consuming view degrades to "no data"
//! instead of crashing.  Per-record decode is lossy for the same reason, a
//! malformed document is skipped with a warning instead of poisoning the scan.
//!
//! Writes are user actions, not view refreshes, so those do propagate errors.
//!

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, trace, warn};

use bousai_formats::{
    AlertMessage, CitizenPosition, Collection, HazardReport, ResponderPosition, SentImage,
};

use crate::{DocumentStore, StoreError};

/// Typed access to every collection, generic over the access method.
///
#[derive(Clone, Debug)]
pub struct Feed<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> Feed<S> {
    pub fn new(store: S) -> Self {
        Feed { store }
    }

    /// The underlying access method.
    ///
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full scan of one collection into typed records.  Fail-open: a store
    /// error yields an empty list, a malformed record is skipped.
    ///
    async fn fetch_all<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let docs = match self.store.get_all(collection).await {
            Ok(docs) => docs,
            Err(e) => {
                error!("fetching {collection} failed: {e}");
                return vec![];
            }
        };

        docs.into_iter()
            .filter_map(|doc| match serde_json::from_value::<T>(doc) {
                Ok(rec) => Some(rec),
                Err(e) => {
                    warn!("skipping malformed {collection} record: {e}");
                    None
                }
            })
            .collect()
    }

    /// Citizen check-in positions.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn citizens(&self) -> Vec<CitizenPosition> {
        self.fetch_all(Collection::Citizen).await
    }

    /// Rescue-team positions.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn rescuers(&self) -> Vec<ResponderPosition> {
        self.fetch_all(Collection::Rescue).await
    }

    /// Town-hall staff positions.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn officials(&self) -> Vec<ResponderPosition> {
        self.fetch_all(Collection::PublicServant).await
    }

    /// Persisted hazard markers.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn hazards(&self) -> Vec<HazardReport> {
        self.fetch_all(Collection::Locations).await
    }

    /// Legacy hazard photo records.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn danger_photos(&self) -> Vec<HazardReport> {
        self.fetch_all(Collection::DangerPhoto).await
    }

    /// All broadcast alerts.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn alerts(&self) -> Vec<AlertMessage> {
        self.fetch_all(Collection::Alert).await
    }

    /// Publication markers.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn sent_images(&self) -> Vec<SentImage> {
        self.fetch_all(Collection::SentImages).await
    }

    /// The single alert the ticker displays: newest `created_at` wins.
    /// `None` on an empty collection or a failed fetch.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn latest_alert(&self) -> Option<AlertMessage> {
        let alerts = self.alerts().await;
        trace!("{} alerts", alerts.len());
        alerts.into_iter().max_by_key(|a| a.created_at)
    }

    /// Broadcast a new alert.  Whitespace-only text is rejected before it
    /// reaches the store.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn send_alert(&self, text: &str) -> Result<String, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::BadParam("empty alert text".to_string()));
        }

        let alert = AlertMessage::new(text);
        let id = self
            .store
            .add(Collection::Alert, &serde_json::to_value(&alert)?)
            .await?;
        debug!("alert {id} sent");
        Ok(id)
    }

    /// Retract an alert by document id.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn cancel_alert(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(Collection::Alert, id).await
    }

    /// Persist a hazard report.  The marker lands in `locations`; when a photo
    /// is attached the legacy `dangerphoto` record is appended as well so the
    /// photo-sharing views keep seeing it.
    ///
    #[tracing::instrument(skip(self, report))]
    pub async fn submit_report(&self, report: &HazardReport) -> Result<String, StoreError> {
        if !report.latitude.is_finite() || !report.longitude.is_finite() {
            return Err(StoreError::BadParam(format!(
                "non-finite coordinates ({}, {})",
                report.latitude, report.longitude
            )));
        }

        let id = self
            .store
            .add(Collection::Locations, &serde_json::to_value(report)?)
            .await?;

        if report.image_url.is_some() {
            self.store
                .add(Collection::DangerPhoto, &serde_json::to_value(report)?)
                .await?;
        }

        debug!("hazard report {id} persisted");
        Ok(id)
    }

    /// Mark a photo as published so it drops out of the unsent listing.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn mark_sent(&self, url: &str) -> Result<String, StoreError> {
        self.store
            .add(Collection::SentImages, &json!({ "url": url }))
            .await
    }
}

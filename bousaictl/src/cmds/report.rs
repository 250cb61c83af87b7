//! Handle the `report` sub-commands: hazard submission and the unsent-photo
//! listing.
//!

use std::collections::HashSet;
use std::fs;

use eyre::{eyre, Result};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use bousai_formats::{from_exif, from_locator, Coordinate, DangerLevel, HazardReport};
use bousai_reconciler::UnsentGallery;
use bousai_sources::{DocumentStore, Feed};

use crate::SubmitOpts;

/// Extract a position from the photo or the locator, rate it, persist it.
///
#[tracing::instrument(skip(feed))]
pub async fn submit_report<S: DocumentStore>(feed: &Feed<S>, sopts: &SubmitOpts) -> Result<()> {
    let level = DangerLevel::try_from(sopts.danger)?;

    let (position, image_url) = match (&sopts.image, &sopts.locator) {
        (Some(path), _) => {
            let data = fs::read(path)?;
            let coord = from_exif(&data)?
                .ok_or_else(|| eyre!("位置情報が見つかりませんでした: {:?}", path))?;
            (coord, Some(path.to_string_lossy().to_string()))
        }
        (None, Some(url)) => (from_locator(url)?, Some(url.clone())),
        (None, None) => return Err(eyre!("specify either --image or --locator")),
    };
    trace!("position = {position}");

    let report = HazardReport::new(position, level, image_url);
    let id = feed.submit_report(&report).await?;

    eprintln!("Report {id} recorded at {position} ({level})");
    Ok(())
}

/// Mark one photo as published, it drops out of the grid on the next refresh.
///
#[tracing::instrument(skip(feed))]
pub async fn publish_photo<S: DocumentStore>(feed: &Feed<S>, url: &str) -> Result<()> {
    let id = feed.mark_sent(url).await?;
    eprintln!("Photo published (marker {id})");
    Ok(())
}

/// Show the photo grid: whatever is still unpublished, newest first, at most
/// one grid's worth.
///
#[tracing::instrument(skip(feed))]
pub async fn list_unsent<S: DocumentStore>(feed: &Feed<S>) -> Result<()> {
    let photos = feed.danger_photos().await;
    let sent: HashSet<String> = feed.sent_images().await.into_iter().map(|s| s.url).collect();

    let mut gallery = UnsentGallery::new();
    gallery.reconcile(&photos, &sent);

    let mut builder = Builder::default();
    builder.push_record(vec!["Photo", "Position"]);
    gallery.shown().iter().for_each(|url| {
        let position = photos
            .iter()
            .find(|p| p.image_url.as_deref() == Some(url))
            .map(|p| p.coordinate())
            .unwrap_or(Coordinate::ORIGIN);
        builder.push_record(vec![url.clone(), position.to_string()]);
    });

    let table = builder.build().with(Style::modern()).to_string();
    eprintln!("{table}");
    eprintln!("{} unsent photo(s)", gallery.shown().len());
    Ok(())
}

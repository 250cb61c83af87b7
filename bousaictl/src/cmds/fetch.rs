//! Handle `fetch CLASS`: pull one record class, rank and filter it the way the
//! dashboard does, then print a table or write CSV.
//!

use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;
use eyre::Result;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use bousai_reconciler::{dedup_by_coordinate_key, PositionBoard, ViewOptions};
use bousai_sources::{DocumentStore, Feed};

use crate::{FeedClass, FetchOpts};

#[tracing::instrument(skip(feed))]
pub async fn fetch_class<S: DocumentStore>(feed: &Feed<S>, fopts: &FetchOpts) -> Result<()> {
    trace!("fetch {:?}", fopts.what);

    match fopts.what {
        FeedClass::Citizens => {
            let mut board = PositionBoard::new();
            board.refresh(feed).await;

            let opts = ViewOptions {
                district: fopts.district,
                search: fopts.search.clone().unwrap_or_default(),
                ..ViewOptions::default()
            };
            let rows = board.rows(&opts);

            if let Some(out) = &fopts.output {
                return write_csv(out, &rows);
            }

            let mut builder = Builder::default();
            builder.push_record(vec!["Name", "Safety", "District", "Position"]);
            rows.iter().for_each(|c| {
                builder.push_record(vec![
                    c.name.clone().unwrap_or_default(),
                    c.safety.to_string(),
                    c.district.label().to_string(),
                    c.coordinate().to_string(),
                ]);
            });
            print_table(builder, rows.len());
        }

        FeedClass::Rescue | FeedClass::Officials => {
            let list = if fopts.what == FeedClass::Rescue {
                feed.rescuers().await
            } else {
                feed.officials().await
            };

            if let Some(out) = &fopts.output {
                return write_csv(out, &list);
            }

            let mut builder = Builder::default();
            builder.push_record(vec!["Name", "Doing", "Position"]);
            list.iter().for_each(|r| {
                builder.push_record(vec![
                    r.name.clone(),
                    r.activity.to_string(),
                    r.coordinate().to_string(),
                ]);
            });
            print_table(builder, list.len());
        }

        FeedClass::Hazards => {
            let list = dedup_by_coordinate_key(feed.hazards().await);

            if let Some(out) = &fopts.output {
                return write_csv(out, &list);
            }

            let mut builder = Builder::default();
            builder.push_record(vec!["Level", "Position", "Created", "Sent"]);
            list.iter().for_each(|h| {
                builder.push_record(vec![
                    h.danger_level.to_string(),
                    h.coordinate().to_string(),
                    h.created_at.to_rfc3339(),
                    h.sent.to_string(),
                ]);
            });
            print_table(builder, list.len());
        }
    }
    Ok(())
}

/// Dump records as CSV into `out`.
///
fn write_csv<T: Serialize>(out: &Path, list: &[T]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(true)
        .from_writer(File::create(out)?);

    for rec in list {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_table(builder: Builder, count: usize) {
    let table = builder.build().with(Style::modern()).to_string();
    eprintln!("{table}");
    eprintln!("{count} record(s)");
}

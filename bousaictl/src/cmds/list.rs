//! Handle the `list` sub-commands.
//!

use eyre::Result;
use strum::IntoEnumIterator;
use tabled::builder::Builder;
use tabled::settings::Style;

use bousai_formats::{Collection, District};

/// List of store collections into a nicely formatted string.
///
#[tracing::instrument]
pub fn list_collections() -> Result<String> {
    let mut builder = Builder::default();
    builder.push_record(vec!["Name", "Description"]);

    Collection::iter().for_each(|c| {
        builder.push_record(vec![c.to_string(), c.describe().to_string()]);
    });

    let table = builder.build().with(Style::modern()).to_string();
    Ok(format!("Listing all collections:\n{table}"))
}

/// List of administrative zones with their map centers.
///
#[tracing::instrument]
pub fn list_districts() -> Result<String> {
    let mut builder = Builder::default();
    builder.push_record(vec!["Name", "Zone", "Lat/Lon"]);

    District::iter().for_each(|d| {
        let center = d.center();
        let point = format!("{:.5}, {:.5}", center.lat, center.lng);
        builder.push_record(vec![d.to_string(), d.label().to_string(), point]);
    });

    let table = builder.build().with(Style::modern()).to_string();
    Ok(format!("Listing all districts:\n{table}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_collections_mentions_all() {
        let out = list_collections().unwrap();
        assert!(out.contains("citizen"));
        assert!(out.contains("sentimages"));
    }

    #[test]
    fn test_list_districts_mentions_all_zones() {
        let out = list_districts().unwrap();
        assert!(out.contains("jinryo"));
        assert!(out.contains("鬼籠野"));
    }
}

//! Names of the collections we read from and write to in the remote document
//! store.  Everything is a full-collection scan on read, a single-document
//! append on write, a delete by generated id.
//!

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// The store collections.
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    EnumIter,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Citizen check-in positions
    #[default]
    Citizen,
    /// Rescue-team positions
    Rescue,
    /// Town-hall staff positions
    PublicServant,
    /// Hazard markers
    Locations,
    /// Broadcast alerts
    Alert,
    /// Publication markers for shared photos
    SentImages,
    /// Legacy hazard + photo metadata records
    DangerPhoto,
}

impl Collection {
    /// Free text shown in listings.
    ///
    pub fn describe(&self) -> &'static str {
        match self {
            Collection::Citizen => "citizen check-in positions",
            Collection::Rescue => "rescue team positions",
            Collection::PublicServant => "town-hall staff positions",
            Collection::Locations => "hazard markers",
            Collection::Alert => "broadcast alerts",
            Collection::SentImages => "publication markers",
            Collection::DangerPhoto => "legacy hazard photo records",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_collection_names() {
        assert_eq!("citizen", Collection::Citizen.to_string());
        assert_eq!("sentimages", Collection::SentImages.to_string());
        assert_eq!(
            Collection::PublicServant,
            Collection::from_str("publicservant").unwrap()
        );
    }
}

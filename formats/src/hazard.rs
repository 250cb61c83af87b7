//! Hazard reports: a position paired with a danger-level rating, submitted by
//! residents with a photo and published on the town map.
//!

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use thiserror::Error;

use crate::Coordinate;

/// Danger rating attached to a report, 0 is the "safe" marker on the selection
/// grid.  Stored as a bare integer on the wire, anything outside 0..=5 is a
/// decoding error.
///
#[derive(
    Clone, Copy, Debug, Default, Deserialize_repr, Eq, Ord, PartialEq, PartialOrd, Serialize_repr,
)]
#[repr(u8)]
pub enum DangerLevel {
    #[default]
    Safe = 0,
    Level1 = 1,
    Level2 = 2,
    Level3 = 3,
    Level4 = 4,
    Level5 = 5,
}

#[derive(Debug, Error)]
#[error("danger level out of range: {0}")]
pub struct InvalidDangerLevel(pub u8);

impl TryFrom<u8> for DangerLevel {
    type Error = InvalidDangerLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let lvl = match value {
            0 => DangerLevel::Safe,
            1 => DangerLevel::Level1,
            2 => DangerLevel::Level2,
            3 => DangerLevel::Level3,
            4 => DangerLevel::Level4,
            5 => DangerLevel::Level5,
            n => return Err(InvalidDangerLevel(n)),
        };
        Ok(lvl)
    }
}

impl Display for DangerLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DangerLevel::Safe => write!(f, "安全"),
            n => write!(f, "危険度{}", *n as u8),
        }
    }
}

/// A persisted hazard report, as stored in the `locations` collection (and its
/// `dangerphoto` legacy variant which also carries the photo reference).
///
/// Immutable once written, except for the `sent` marker used to exclude it
/// from the unsent-image listing.
///
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardReport {
    /// Generated document id
    #[serde(default)]
    pub id: String,
    /// Reported position (lat)
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub latitude: f64,
    /// Reported position (lon)
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub longitude: f64,
    /// Rating picked on submission
    #[serde(default)]
    pub danger_level: DangerLevel,
    /// Handle of the submitted photo, legacy records may not have one
    pub image_url: Option<String>,
    /// Submission time, legacy photo records predate the field
    #[serde(default = "epoch")]
    pub created_at: DateTime<Utc>,
    /// Publication marker
    #[serde(default)]
    pub sent: bool,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl HazardReport {
    /// Fresh report stamped now.
    ///
    pub fn new(position: Coordinate, level: DangerLevel, image_url: Option<String>) -> Self {
        HazardReport {
            id: String::new(),
            latitude: position.lat,
            longitude: position.lng,
            danger_level: level,
            image_url,
            created_at: Utc::now(),
            sent: false,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    /// Key used to collapse markers sharing the same position.
    ///
    #[inline]
    pub fn coordinate_key(&self) -> String {
        self.coordinate().key()
    }
}

/// Publication marker kept in the `sentimages` collection, one per published
/// photo.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SentImage {
    /// Generated document id
    #[serde(default)]
    pub id: String,
    /// The published photo handle
    pub url: String,
}

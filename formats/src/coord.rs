//! Geographic coordinate, the common currency between the extractors, the
//! reconciler and the store records.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ExtractError;

/// A WGS84 position.  Hazard reports, citizens and responders all carry one.
///
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, negative is South
    pub lat: f64,
    /// Longitude in decimal degrees, negative is West
    pub lng: f64,
}

impl Coordinate {
    /// The (0, 0) sentinel the legacy extraction path falls back to.
    ///
    pub const ORIGIN: Coordinate = Coordinate { lat: 0., lng: 0. };

    /// Checked constructor, coordinates must be finite numbers.
    ///
    pub fn new(lat: f64, lng: f64) -> Result<Self, ExtractError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ExtractError::NotFinite(lat, lng));
        }
        Ok(Coordinate { lat, lng })
    }

    /// Key used to collapse markers sharing the same position.
    ///
    #[inline]
    pub fn key(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

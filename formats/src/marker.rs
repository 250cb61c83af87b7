//! Marker colour coding for the map display.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::SafetyStatus;

/// Fill colour of a citizen marker, derived from the check-in status.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    /// Needs rescue
    Red,
    /// Safe
    Green,
    /// Everything else
    White,
}

impl From<SafetyStatus> for MarkerColor {
    fn from(value: SafetyStatus) -> Self {
        match value {
            SafetyStatus::NeedsRescue => MarkerColor::Red,
            SafetyStatus::Safe => MarkerColor::Green,
            SafetyStatus::Unknown => MarkerColor::White,
        }
    }
}

impl Display for MarkerColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarkerColor::Red => "red",
            MarkerColor::Green => "green",
            MarkerColor::White => "white",
        };
        write!(f, "{s}")
    }
}

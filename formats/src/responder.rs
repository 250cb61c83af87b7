//! Position records for the people doing the responding: rescue teams and
//! town-hall staff.  Both classes share one shape, read-only feeds for us.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::Coordinate;

/// What a responder is currently doing.  Wire values are the Japanese UI
/// strings, anything else folds into `Unknown`.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum ActivityStatus {
    /// 救助中
    #[serde(rename = "救助中")]
    Rescuing,
    /// 待機中
    #[serde(rename = "待機中")]
    StandingBy,
    /// 巡回中
    #[serde(rename = "巡回中")]
    Patrolling,
    /// Unreported or unrecognized
    #[default]
    #[serde(rename = "不明")]
    Unknown,
}

impl<'de> Deserialize<'de> for ActivityStatus {
    /// Wire values are free text, everything we do not recognize is `Unknown`.
    ///
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let status = match s.as_str() {
            "救助中" | "rescuing" => ActivityStatus::Rescuing,
            "待機中" | "standing-by" => ActivityStatus::StandingBy,
            "巡回中" | "patrolling" => ActivityStatus::Patrolling,
            _ => ActivityStatus::Unknown,
        };
        Ok(status)
    }
}

impl Display for ActivityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActivityStatus::Rescuing => "救助中",
            ActivityStatus::StandingBy => "待機中",
            ActivityStatus::Patrolling => "巡回中",
            ActivityStatus::Unknown => "不明",
        };
        write!(f, "{s}")
    }
}

/// A rescue-team member or public servant with a live position, as stored in
/// the `rescue` and `publicservant` collections.
///
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResponderPosition {
    /// Generated document id
    #[serde(default)]
    pub id: String,
    /// Responder name
    pub name: String,
    /// Actual position (lat)
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub latitude: f64,
    /// Actual position (lon)
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub longitude: f64,
    /// Current activity, the legacy field name is `doing`
    #[serde(rename = "doing", default)]
    pub activity: ActivityStatus,
}

impl ResponderPosition {
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responder_from_wire() {
        let data = r##"{"id":"r1","name":"救助隊A","latitude":33.98,"longitude":134.37,"doing":"救助中"}"##;
        let r: ResponderPosition = serde_json::from_str(data).unwrap();
        assert_eq!(ActivityStatus::Rescuing, r.activity);
        assert_eq!("33.98,134.37", r.coordinate().key());
    }

    #[test]
    fn test_activity_unknown_fold() {
        let data = r##"{"name":"B","latitude":0.0,"longitude":0.0,"doing":"coffee break"}"##;
        let r: ResponderPosition = serde_json::from_str(data).unwrap();
        assert_eq!(ActivityStatus::Unknown, r.activity);
    }
}

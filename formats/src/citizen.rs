//! Citizen safety-status records, owned by the external registration process
//! and read-only for us.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

use crate::Coordinate;

/// Safety status as reported through the check-in flow.
///
/// The store carries the Japanese UI strings; every unrecognized value folds
/// into `Unknown` instead of silently turning into a new white-marker status.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum SafetyStatus {
    /// 救助が必要, shown first everywhere
    #[serde(rename = "救助が必要")]
    NeedsRescue,
    /// 無事, hidden on the hazard map
    #[serde(rename = "無事")]
    Safe,
    /// Not checked in yet, or an unrecognized wire value
    #[default]
    #[serde(rename = "不明")]
    Unknown,
}

impl<'de> Deserialize<'de> for SafetyStatus {
    /// Wire values are free text, everything we do not recognize is `Unknown`.
    ///
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let status = match s.as_str() {
            "救助が必要" | "needs-rescue" => SafetyStatus::NeedsRescue,
            "無事" | "safe" => SafetyStatus::Safe,
            _ => SafetyStatus::Unknown,
        };
        Ok(status)
    }
}

impl SafetyStatus {
    /// Display rank, lower sorts first.  This is the three-tier ordering the
    /// rescue list relies on: needs-rescue, then safe, then unknown.
    ///
    #[inline]
    pub fn priority(&self) -> u8 {
        match self {
            SafetyStatus::NeedsRescue => 0,
            SafetyStatus::Safe => 1,
            SafetyStatus::Unknown => 2,
        }
    }
}

impl Display for SafetyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SafetyStatus::NeedsRescue => "救助が必要",
            SafetyStatus::Safe => "無事",
            SafetyStatus::Unknown => "不明",
        };
        write!(f, "{s}")
    }
}

/// The five administrative zones, used for list filtering and map re-centering.
///
#[derive(
    Clone, Copy, Debug, Deserialize, EnumIter, EnumString, Eq, PartialEq, Serialize, StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum District {
    #[serde(rename = "神領", alias = "jinryo")]
    Jinryo,
    #[serde(rename = "上分", alias = "kamibun")]
    Kamibun,
    #[serde(rename = "下分", alias = "shimobun")]
    Shimobun,
    #[serde(rename = "阿野", alias = "ano")]
    Ano,
    #[serde(rename = "鬼籠野", alias = "orono")]
    Orono,
}

impl District {
    /// Where the map recenters when the district is selected.
    ///
    pub fn center(&self) -> Coordinate {
        let (lat, lng) = match self {
            District::Jinryo => (33.96725162, 134.35047543),
            District::Kamibun => (33.964313, 134.2590853),
            District::Shimobun => (33.9598865, 134.3070941),
            District::Ano => (34.005311, 134.355696),
            District::Orono => (33.9869602, 134.371021),
        };
        Coordinate { lat, lng }
    }

    /// Japanese zone name as stored on the wire.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            District::Jinryo => "神領",
            District::Kamibun => "上分",
            District::Shimobun => "下分",
            District::Ano => "阿野",
            District::Orono => "鬼籠野",
        }
    }
}

/// A citizen with a last-known position, as stored in the `citizen` collection.
///
/// Geolocation sometimes comes back as strings instead of floats depending on
/// which client wrote the record, `serde_as` handles both.
///
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CitizenPosition {
    /// Generated document id
    #[serde(default)]
    pub id: String,
    /// Registered name, optional
    pub name: Option<String>,
    /// Check-in status, missing means unknown
    #[serde(default)]
    pub safety: SafetyStatus,
    /// Actual position (lat)
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub latitude: f64,
    /// Actual position (lon)
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub longitude: f64,
    /// Administrative zone
    pub district: District,
}

impl CitizenPosition {
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
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_citizen_from_wire() {
        let data = r##"{"id":"c1","name":"山田","safety":"救助が必要","latitude":33.96,"longitude":134.35,"district":"神領"}"##;
        let c: CitizenPosition = serde_json::from_str(data).unwrap();
        assert_eq!(SafetyStatus::NeedsRescue, c.safety);
        assert_eq!(District::Jinryo, c.district);
    }

    #[test]
    fn test_citizen_stringly_geolocation() {
        let data = r##"{"name":null,"safety":"無事","latitude":"33.9598865","longitude":"134.3070941","district":"下分"}"##;
        let c: CitizenPosition = serde_json::from_str(data).unwrap();
        assert_eq!(SafetyStatus::Safe, c.safety);
        assert!((c.latitude - 33.9598865).abs() < 1e-9);
    }

    #[rstest]
    #[case("\"無\"")]
    #[case("\"RESCUE ME\"")]
    #[case("\"\"")]
    fn test_safety_unknown_fold(#[case] wire: &str) {
        let s: SafetyStatus = serde_json::from_str(wire).unwrap();
        assert_eq!(SafetyStatus::Unknown, s);
    }

    #[test]
    fn test_safety_priority_order() {
        assert!(SafetyStatus::NeedsRescue.priority() < SafetyStatus::Safe.priority());
        assert!(SafetyStatus::Safe.priority() < SafetyStatus::Unknown.priority());
    }

    #[test]
    fn test_district_from_str() {
        assert_eq!(District::Orono, District::from_str("orono").unwrap());
        assert_eq!(District::Ano, District::from_str("Ano").unwrap());
        assert!(District::from_str("midtown").is_err());
    }

    #[test]
    fn test_district_center() {
        let c = District::Jinryo.center();
        assert!((c.lat - 33.96725162).abs() < 1e-9);
        assert!((c.lng - 134.35047543).abs() < 1e-9);
    }
}

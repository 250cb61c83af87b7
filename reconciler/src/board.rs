//! The one parameterized view over every record class.
//!
//! The board owns its own copy of the fetched data, refreshed as a whole; the
//! remote store stays the sole authority.  List rows and map markers are both
//! derived from the same copy, driven by `ViewOptions`, instead of each
//! display variant doing its own fetch and sort.
//!

use serde::Serialize;
use tracing::trace;

use bousai_formats::{
    CitizenPosition, Coordinate, District, HazardReport, MarkerColor, ResponderPosition,
    SafetyStatus,
};
use bousai_sources::{DocumentStore, Feed};

use crate::{dedup_by_coordinate_key, sort_citizens_by_priority};

/// What the consuming view wants to see.
///
#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    /// Only this administrative zone, everything when unset
    pub district: Option<District>,
    /// Case-insensitive needle matched against name and safety text
    pub search: String,
    /// Show the rescue-team layer
    pub show_rescue: bool,
    /// Show the town-hall staff layer
    pub show_officials: bool,
}

/// One marker on the map.  `color` is the citizen status coding, `None` means
/// the default pin.
///
#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub color: Option<MarkerColor>,
    pub label: Option<String>,
}

/// The display board, one fetched copy of every record class.
///
#[derive(Clone, Debug, Default)]
pub struct PositionBoard {
    citizens: Vec<CitizenPosition>,
    rescuers: Vec<ResponderPosition>,
    officials: Vec<ResponderPosition>,
    hazards: Vec<HazardReport>,
}

impl PositionBoard {
    pub fn new() -> Self {
        PositionBoard::default()
    }

    /// Repopulate every record class from the store.  Each fetch is fail-open
    /// below us, so the worst case is an empty board, never an error.
    ///
    #[tracing::instrument(skip_all)]
    pub async fn refresh<S: DocumentStore>(&mut self, feed: &Feed<S>) {
        let mut citizens = feed.citizens().await;
        sort_citizens_by_priority(&mut citizens);
        self.citizens = citizens;

        self.rescuers = feed.rescuers().await;
        self.officials = feed.officials().await;
        self.hazards = dedup_by_coordinate_key(feed.hazards().await);

        trace!(
            "board: {} citizens, {} rescuers, {} officials, {} hazards",
            self.citizens.len(),
            self.rescuers.len(),
            self.officials.len(),
            self.hazards.len()
        );
    }

    /// Ranked citizen list, already priority-sorted on refresh.
    ///
    pub fn citizens(&self) -> &[CitizenPosition] {
        &self.citizens
    }

    pub fn rescuers(&self) -> &[ResponderPosition] {
        &self.rescuers
    }

    pub fn officials(&self) -> &[ResponderPosition] {
        &self.officials
    }

    /// Deduplicated hazard markers.
    ///
    pub fn hazards(&self) -> &[HazardReport] {
        &self.hazards
    }

    /// Rows of the citizen table: district filter plus name/safety search.
    ///
    pub fn rows(&self, opts: &ViewOptions) -> Vec<&CitizenPosition> {
        let needle = opts.search.to_lowercase();
        self.citizens
            .iter()
            .filter(|c| opts.district.map_or(true, |d| c.district == d))
            .filter(|c| {
                needle.is_empty()
                    || c.name
                        .as_ref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
                    || c.safety.to_string().contains(&needle)
            })
            .collect()
    }

    /// Everything the map displays under the given options.  Confirmed-safe
    /// citizens are left off the map, their tier only matters in the list.
    ///
    pub fn markers(&self, opts: &ViewOptions) -> Vec<Marker> {
        let mut out: Vec<Marker> = self
            .citizens
            .iter()
            .filter(|c| c.safety != SafetyStatus::Safe)
            .filter(|c| opts.district.map_or(true, |d| c.district == d))
            .map(|c| Marker {
                position: c.coordinate(),
                color: Some(c.safety.into()),
                label: None,
            })
            .collect();

        out.extend(self.hazards.iter().map(|h| Marker {
            position: h.coordinate(),
            color: None,
            label: Some((h.danger_level as u8).to_string()),
        }));

        if opts.show_rescue {
            out.extend(self.rescuers.iter().map(|r| Marker {
                position: r.coordinate(),
                color: None,
                label: None,
            }));
        }

        if opts.show_officials {
            out.extend(self.officials.iter().map(|r| Marker {
                position: r.coordinate(),
                color: None,
                label: None,
            }));
        }

        out
    }

    /// Where the map centers: the selected district, or the town core.
    ///
    pub fn center(&self, opts: &ViewOptions) -> Coordinate {
        opts.district
            .map_or_else(|| District::Jinryo.center(), |d| d.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use bousai_formats::Collection;
    use bousai_sources::StoreError;
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    /// Canned store keyed by collection.
    ///
    #[derive(Debug)]
    struct TownStore;

    #[async_trait]
    impl DocumentStore for TownStore {
        async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
            let docs = match collection {
                Collection::Citizen => vec![
                    json!({"id": "c1", "name": "Asa", "safety": "無事", "latitude": 33.96, "longitude": 134.35, "district": "神領"}),
                    json!({"id": "c2", "name": "Ume", "safety": "救助が必要", "latitude": 33.964, "longitude": 134.259, "district": "上分"}),
                    json!({"id": "c3", "name": "Kan", "latitude": 33.959, "longitude": 134.307, "district": "下分"}),
                ],
                Collection::Rescue => vec![
                    json!({"id": "r1", "name": "隊A", "latitude": 33.98, "longitude": 134.37, "doing": "救助中"}),
                ],
                Collection::PublicServant => vec![],
                Collection::Locations => vec![
                    json!({"id": "h1", "latitude": 34.0, "longitude": 134.3, "dangerLevel": 4, "createdAt": "2024-06-30T12:00:00Z"}),
                    json!({"id": "h2", "latitude": 34.0, "longitude": 134.3, "dangerLevel": 2, "createdAt": "2024-06-29T12:00:00Z"}),
                ],
                _ => vec![],
            };
            Ok(docs)
        }

        async fn add(&self, _c: Collection, _d: &Value) -> Result<String, StoreError> {
            Ok("x".to_string())
        }

        async fn delete(&self, _c: Collection, _id: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    /// Store that always errors.
    ///
    #[derive(Debug)]
    struct DownStore;

    #[async_trait]
    impl DocumentStore for DownStore {
        async fn get_all(&self, c: Collection) -> Result<Vec<Value>, StoreError> {
            Err(StoreError::Status(StatusCode::BAD_GATEWAY, c.to_string()))
        }

        async fn add(&self, c: Collection, _d: &Value) -> Result<String, StoreError> {
            Err(StoreError::Status(StatusCode::BAD_GATEWAY, c.to_string()))
        }

        async fn delete(&self, c: Collection, _id: &str) -> Result<(), StoreError> {
            Err(StoreError::Status(StatusCode::BAD_GATEWAY, c.to_string()))
        }
    }

    #[tokio::test]
    async fn test_refresh_sorts_and_dedups() {
        let feed = Feed::new(TownStore);
        let mut board = PositionBoard::new();
        board.refresh(&feed).await;

        // Rescue first, then safe, then unknown
        //
        let ids: Vec<&str> = board.citizens().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(vec!["c2", "c1", "c3"], ids);

        // The two markers at the same spot collapse to the first-fetched
        //
        assert_eq!(1, board.hazards().len());
        assert_eq!("h1", board.hazards()[0].id);
    }

    #[tokio::test]
    async fn test_rows_filtering() {
        let feed = Feed::new(TownStore);
        let mut board = PositionBoard::new();
        board.refresh(&feed).await;

        let all = board.rows(&ViewOptions::default());
        assert_eq!(3, all.len());

        let kamibun = board.rows(&ViewOptions {
            district: Some(District::Kamibun),
            ..ViewOptions::default()
        });
        assert_eq!(1, kamibun.len());
        assert_eq!("c2", kamibun[0].id);

        let by_name = board.rows(&ViewOptions {
            search: "asa".to_string(),
            ..ViewOptions::default()
        });
        assert_eq!(1, by_name.len());
        assert_eq!("c1", by_name[0].id);

        let by_safety = board.rows(&ViewOptions {
            search: "救助".to_string(),
            ..ViewOptions::default()
        });
        assert_eq!(1, by_safety.len());
        assert_eq!("c2", by_safety[0].id);
    }

    #[tokio::test]
    async fn test_markers_skip_safe_and_gate_layers() {
        let feed = Feed::new(TownStore);
        let mut board = PositionBoard::new();
        board.refresh(&feed).await;

        // c1 is safe and stays off the map: c2 red, c3 white, one hazard
        //
        let base = board.markers(&ViewOptions::default());
        assert_eq!(3, base.len());
        assert_eq!(Some(MarkerColor::Red), base[0].color);
        assert_eq!(Some(MarkerColor::White), base[1].color);
        assert_eq!(Some("4".to_string()), base[2].label);

        let with_rescue = board.markers(&ViewOptions {
            show_rescue: true,
            ..ViewOptions::default()
        });
        assert_eq!(4, with_rescue.len());
    }

    #[tokio::test]
    async fn test_center_follows_district() {
        let board = PositionBoard::new();

        let home = board.center(&ViewOptions::default());
        assert!((home.lat - 33.96725162).abs() < 1e-9);

        let ano = board.center(&ViewOptions {
            district: Some(District::Ano),
            ..ViewOptions::default()
        });
        assert!((ano.lat - 34.005311).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_refresh_against_down_store_yields_empty_board() {
        let feed = Feed::new(DownStore);
        let mut board = PositionBoard::new();
        board.refresh(&feed).await;

        assert!(board.citizens().is_empty());
        assert!(board.rescuers().is_empty());
        assert!(board.hazards().is_empty());
        assert!(board.markers(&ViewOptions::default()).is_empty());
    }
}

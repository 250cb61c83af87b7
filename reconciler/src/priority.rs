//! Ranking of the citizen list by rescue priority.
//!

use bousai_formats::CitizenPosition;

/// Stable three-tier sort: everyone needing rescue first, then the confirmed
/// safe, then the unknowns.  Ties keep their fetch order, the rescue list
/// relies on that.
///
pub fn sort_citizens_by_priority(citizens: &mut [CitizenPosition]) {
    citizens.sort_by_key(|c| c.safety.priority());
}

#[cfg(test)]
mod tests {
    use super::*;

    use bousai_formats::{District, SafetyStatus};

    fn citizen(name: &str, safety: SafetyStatus) -> CitizenPosition {
        CitizenPosition {
            id: name.to_string(),
            name: Some(name.to_string()),
            safety,
            latitude: 33.96,
            longitude: 134.35,
            district: District::Jinryo,
        }
    }

    #[test]
    fn test_sort_three_tiers() {
        let mut list = vec![
            citizen("a", SafetyStatus::Unknown),
            citizen("b", SafetyStatus::Safe),
            citizen("c", SafetyStatus::NeedsRescue),
            citizen("d", SafetyStatus::Safe),
            citizen("e", SafetyStatus::NeedsRescue),
        ];

        sort_citizens_by_priority(&mut list);

        let order: Vec<&str> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(vec!["c", "e", "b", "d", "a"], order);
    }

    #[test]
    fn test_sort_is_stable_within_tier() {
        let mut list = vec![
            citizen("u1", SafetyStatus::Unknown),
            citizen("u2", SafetyStatus::Unknown),
            citizen("s1", SafetyStatus::Safe),
            citizen("u3", SafetyStatus::Unknown),
            citizen("s2", SafetyStatus::Safe),
        ];

        sort_citizens_by_priority(&mut list);

        let order: Vec<&str> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(vec!["s1", "s2", "u1", "u2", "u3"], order);
    }

    #[test]
    fn test_sort_empty() {
        let mut list: Vec<CitizenPosition> = vec![];
        sort_citizens_by_priority(&mut list);
        assert!(list.is_empty());
    }
}

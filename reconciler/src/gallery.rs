//! Tracking of hazard photos that have not been published yet.
//!
//! The selection grid shows at most six photos.  On every refresh, photos
//! already published (present in the sent-set) drop out, newly discovered
//! ones go in front of the ones already on display, and the list is cut back
//! to the grid size.
//!

use std::collections::HashSet;

use tracing::trace;

use bousai_formats::HazardReport;

/// Size of the photo selection grid.
pub const MAX_DISPLAY: usize = 6;

/// One reconciliation pass, pure: `previous` is what the grid currently
/// shows, `fetched` the hazard records in fetch order, `sent` the published
/// set.
///
pub fn reconcile_unsent(
    previous: &[String],
    fetched: &[HazardReport],
    sent: &HashSet<String>,
) -> Vec<String> {
    // Newly discovered photos first, in fetch order
    //
    let mut next: Vec<String> = vec![];
    for url in fetched.iter().filter_map(|h| h.image_url.as_ref()) {
        if sent.contains(url) || previous.contains(url) || next.iter().any(|u| u == url) {
            continue;
        }
        next.push(url.clone());
    }

    // Then what was already displayed, minus anything published since
    //
    next.extend(previous.iter().filter(|u| !sent.contains(*u)).cloned());
    next.truncate(MAX_DISPLAY);

    trace!("{} unsent photos on display", next.len());
    next
}

/// The stateful grid a view owns across refreshes.
///
#[derive(Clone, Debug, Default)]
pub struct UnsentGallery {
    shown: Vec<String>,
}

impl UnsentGallery {
    pub fn new() -> Self {
        UnsentGallery::default()
    }

    /// What the grid currently shows.
    ///
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Fold a fresh fetch into the display list.
    ///
    pub fn reconcile(&mut self, fetched: &[HazardReport], sent: &HashSet<String>) -> &[String] {
        self.shown = reconcile_unsent(&self.shown, fetched, sent);
        &self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bousai_formats::{Coordinate, DangerLevel};

    fn photo(url: &str) -> HazardReport {
        HazardReport::new(
            Coordinate { lat: 33.96, lng: 134.35 },
            DangerLevel::Level2,
            Some(url.to_string()),
        )
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_photos_prepend_and_truncate() {
        let previous = urls(&["p1", "p2", "p3", "p4", "p5", "p6"]);
        let fetched = vec![photo("n1"), photo("n2")];
        let sent = HashSet::new();

        let out = reconcile_unsent(&previous, &fetched, &sent);

        assert_eq!(MAX_DISPLAY, out.len());
        assert_eq!(urls(&["n1", "n2", "p1", "p2", "p3", "p4"]), out);
    }

    #[test]
    fn test_sent_photos_drop_out() {
        let previous = urls(&["p1", "p2"]);
        let fetched = vec![photo("p1"), photo("p2"), photo("n1")];
        let sent = HashSet::from(["p1".to_string()]);

        let out = reconcile_unsent(&previous, &fetched, &sent);
        assert_eq!(urls(&["n1", "p2"]), out);
    }

    #[test]
    fn test_duplicate_fetch_entries_collapse() {
        let fetched = vec![photo("n1"), photo("n1"), photo("n2")];
        let out = reconcile_unsent(&[], &fetched, &HashSet::new());
        assert_eq!(urls(&["n1", "n2"]), out);
    }

    #[test]
    fn test_records_without_photo_are_ignored() {
        let mut bare = photo("ignored");
        bare.image_url = None;

        let out = reconcile_unsent(&[], &[bare, photo("n1")], &HashSet::new());
        assert_eq!(urls(&["n1"]), out);
    }

    #[test]
    fn test_gallery_keeps_state_across_refreshes() {
        let mut gallery = UnsentGallery::new();
        let sent = HashSet::new();

        gallery.reconcile(&[photo("a"), photo("b")], &sent);
        assert_eq!(urls(&["a", "b"]), gallery.shown());

        gallery.reconcile(&[photo("c")], &sent);
        assert_eq!(urls(&["c", "a", "b"]), gallery.shown());

        let sent = HashSet::from(["a".to_string()]);
        gallery.reconcile(&[], &sent);
        assert_eq!(urls(&["c", "b"]), gallery.shown());
    }
}

//! Reconciliation of the live position feeds into ranked, deduplicated
//! display lists.
//!
//! The submodules deal with:
//!
//! - ranking citizens by rescue priority (`priority`)
//! - tracking which hazard photos are still unpublished (`gallery`)
//! - collapsing markers sharing a position (`dedup`)
//! - the one parameterized view over all record classes (`board`)
//! - the cancellable alert poller (`ticker`)
//!

pub use board::*;
pub use dedup::*;
pub use gallery::*;
pub use priority::*;
pub use ticker::*;

mod board;
mod dedup;
mod gallery;
mod priority;
mod ticker;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

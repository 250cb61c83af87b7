//! Definition of the data formats used by the bousai framework.
//!
//! This module holds the wire representation of every record class stored in the remote
//! document store (citizens, responders, hazard reports, alerts) plus the coordinate
//! extraction utilities that turn a submitted photo or an encoded resource locator into
//! a `Coordinate`.
//!
//! To add a new record class, insert the collection name in `Collection` and a
//! `CLASS.rs` file defining the wire struct and whatever conversions are needed.
//!

// Re-export for convenience
//
pub use alert::*;
pub use citizen::*;
pub use collection::*;
pub use coord::*;
pub use error::*;
pub use hazard::*;
pub use locator::*;
pub use marker::*;
pub use photo::*;
pub use responder::*;

mod alert;
mod citizen;
mod collection;
mod coord;
mod error;
mod hazard;
mod locator;
mod marker;
mod photo;
mod responder;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

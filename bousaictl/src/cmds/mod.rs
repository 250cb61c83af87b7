//! Implementation of the various sub-commands.
//!

pub use alert::*;
pub use fetch::*;
pub use list::*;
pub use report::*;

mod alert;
mod fetch;
mod list;
mod report;

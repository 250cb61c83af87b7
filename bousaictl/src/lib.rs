//! Library part of the `bousaictl` driver: the command definitions and their
//! implementations, kept out of `main.rs` so the option parsing stays testable.
//!

pub use cli::*;
pub use cmds::*;

mod cli;
mod cmds;

//! Module describing all possible commands and sub-commands to the `bousaictl` main driver.
//!
//! We have four main commands:
//!
//! - `fetch`
//! - `list`
//! - `alert`
//! - `report`
//!
//! `fetch` pulls one record class out of the store, ranks and filters it the way the
//! dashboard does, and prints it as a table (or CSV with `-o`).
//!
//! `alert` handles the broadcast ticker: show the current alert, send a new one, retract
//! one, or keep watching like the dashboard belt does.
//!
//! `report` covers hazard submission: extract the position out of a photo or an encoded
//! locator, rate it, persist it; plus the unsent-photo listing.
//!
//! `completion` is here just to configure the various shells completion system.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser, ValueEnum};
use clap_complete::shells::Shell;

use bousai_formats::District;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `fetch [--district D] [--search TEXT] [-o FILE] CLASS`
/// `list (collections|districts)`
/// `alert (show|send|cancel|watch) OPTS`
/// `report (submit|unsent) OPTS`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Fetch one record class from the store
    Fetch(FetchOpts),
    /// Install default configuration files
    Init,
    /// List known collections or districts
    List(ListOpts),
    /// Handle broadcast alerts
    Alert(AlertOpts),
    /// Handle hazard reports
    Report(ReportOpts),
    /// Display the full version
    Version,
}

// ------

/// The record classes the dashboard displays.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FeedClass {
    /// Citizen check-in positions, priority-sorted
    Citizens,
    /// Rescue-team positions
    Rescue,
    /// Town-hall staff positions
    Officials,
    /// Hazard markers, deduplicated
    Hazards,
}

/// Options for fetching one class with the dashboard's filters.
///
#[derive(Debug, Parser)]
pub struct FetchOpts {
    /// Only this administrative zone (citizens only).
    #[clap(long)]
    pub district: Option<District>,
    /// Name/safety search needle (citizens only).
    #[clap(long)]
    pub search: Option<String>,
    /// Output file (CSV instead of a table).
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Record class.
    #[clap(value_parser)]
    pub what: FeedClass,
}

// ------

/// This contains only the `alert` sub-commands.
///
#[derive(Debug, Parser)]
pub struct AlertOpts {
    /// Sub-commands
    #[clap(subcommand)]
    pub subcmd: AlertSubCommand,
}

/// All `alert` sub-commands:
///
/// `alert show`
/// `alert send TEXT`
/// `alert cancel ID`
/// `alert watch [--every 5s]`
///
#[derive(Debug, Parser)]
pub enum AlertSubCommand {
    /// Display the most recent alert
    Show,
    /// Broadcast a new alert
    Send(SendOpts),
    /// Retract an alert by document id
    Cancel(CancelOpts),
    /// Keep polling like the dashboard ticker does
    Watch(WatchOpts),
}

#[derive(Debug, Parser)]
pub struct SendOpts {
    /// Broadcast text
    pub text: String,
}

#[derive(Debug, Parser)]
pub struct CancelOpts {
    /// Document id
    pub id: String,
}

#[derive(Debug, Parser)]
pub struct WatchOpts {
    /// Poll period
    #[clap(long, default_value = "5s")]
    pub every: humantime::Duration,
}

// ------

/// This contains only the `report` sub-commands.
///
#[derive(Debug, Parser)]
pub struct ReportOpts {
    /// Sub-commands
    #[clap(subcommand)]
    pub subcmd: ReportSubCommand,
}

/// All `report` sub-commands:
///
/// `report submit [-d LEVEL] (--image FILE | --locator URL)`
/// `report publish URL`
/// `report unsent`
///
#[derive(Debug, Parser)]
pub enum ReportSubCommand {
    /// Extract a position and persist a hazard report
    Submit(SubmitOpts),
    /// Mark a photo as published so it leaves the unsent grid
    Publish(PublishOpts),
    /// List photos not published yet
    Unsent,
}

#[derive(Debug, Parser)]
pub struct PublishOpts {
    /// The photo handle to mark as sent
    pub url: String,
}

#[derive(Debug, Parser)]
pub struct SubmitOpts {
    /// Danger rating, 0 (safe) to 5.
    #[clap(short = 'd', long, default_value = "0")]
    pub danger: u8,
    /// Photo with embedded location metadata.
    #[clap(short = 'i', long, conflicts_with = "locator")]
    pub image: Option<PathBuf>,
    /// Resource locator with a coordinate-encoded filename.
    #[clap(short = 'l', long)]
    pub locator: Option<String>,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All `list` sub-commands:
///
/// `list collections`
/// `list districts`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
}

/// These are the sub-commands for `list`
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// List all store collections
    Collections,
    /// List the administrative zones and their map centers
    Districts,
}

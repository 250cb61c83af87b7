use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::trace;

use bousai_common::{default_config_dir, init_logging};
use bousai_sources::{Feed, RestStore, StoreConfig};
use bousaictl::{
    cancel_alert, fetch_class, list_collections, list_districts, list_unsent, publish_photo,
    send_alert, show_alert, submit_report, watch_alerts, AlertSubCommand, ListSubCommand, Opts,
    ReportSubCommand, SubCommand,
};

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging, hierarchical output when verbose.
    //
    init_logging(NAME, opts.verbose > 0, None)?;

    // These stand alone, no store endpoint involved.
    //
    match &opts.subcmd {
        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
            return Ok(());
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => {
            let str = match lopts.cmd {
                ListSubCommand::Collections => list_collections()?,
                ListSubCommand::Districts => list_districts()?,
            };
            eprintln!("{}", str);
            return Ok(());
        }

        // Standalone `init` command, installs the default config
        //
        SubCommand::Init => {
            let dir = default_config_dir();
            StoreConfig::install_defaults(&dir)?;
            eprintln!("Default configuration installed in {dir:?}");
            return Ok(());
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", bousai_common::version());
            eprintln!("\t{}", bousai_formats::version());
            eprintln!("\t{}", bousai_sources::version());
            eprintln!("\t{}", bousai_reconciler::version());
            return Ok(());
        }

        _ => (),
    }

    // Banner
    //
    banner()?;

    // Config only has the store endpoint and credentials.
    //
    let cfn = opts.config.as_ref().and_then(|p| p.to_str());
    let cfg = StoreConfig::load(cfn)?;

    let store = RestStore::new(&cfg.store.base_url, cfg.store.auth.clone());
    let feed = Feed::new(store);

    handle_subcmd(&feed, &opts).await
}

pub async fn handle_subcmd(feed: &Feed<RestStore>, opts: &Opts) -> Result<()> {
    match &opts.subcmd {
        // Handle `fetch class`
        //
        SubCommand::Fetch(fopts) => {
            trace!("fetch");

            fetch_class(feed, fopts).await
        }

        // Handle `alert (show|send|cancel|watch)`
        //
        SubCommand::Alert(aopts) => {
            trace!("alert");

            match &aopts.subcmd {
                AlertSubCommand::Show => show_alert(feed).await,
                AlertSubCommand::Send(sopts) => send_alert(feed, &sopts.text).await,
                AlertSubCommand::Cancel(copts) => cancel_alert(feed, &copts.id).await,
                AlertSubCommand::Watch(wopts) => watch_alerts(feed, wopts).await,
            }
        }

        // Handle `report (submit|unsent)`
        //
        SubCommand::Report(ropts) => {
            trace!("report");

            match &ropts.subcmd {
                ReportSubCommand::Submit(sopts) => submit_report(feed, sopts).await,
                ReportSubCommand::Publish(popts) => publish_photo(feed, &popts.url).await,
                ReportSubCommand::Unsent => list_unsent(feed).await,
            }
        }

        // Already handled before the config load
        //
        _ => Ok(()),
    }
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}

mod args;
mod commands;
mod global_settings;
mod parsing;

use crate::args::build_cli;
use crate::commands::run;
use crate::global_settings::{GlobalSettings, Kind};
use anyhow::{Result, bail};
use ranges_lib::{DateRange, DateTimeRange, TimeOfDayRange};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);
    settings.init_logging();

    let Some((command, sub)) = matches.subcommand() else {
        bail!("missing command");
    };

    if command == "completions" {
        if let Some(shell) = sub.get_one::<clap_complete_command::Shell>("shell") {
            shell.generate(&mut build_cli(), &mut std::io::stdout());
        }
        return Ok(());
    }

    log::info!("{} on {:?} ranges", command, settings.kind);
    let output = match settings.kind {
        Kind::TimeOfDay => run::<TimeOfDayRange>(&settings, command, sub)?,
        Kind::Date => run::<DateRange>(&settings, command, sub)?,
        Kind::DateTime => run::<DateTimeRange>(&settings, command, sub)?,
    };
    println!("{}", output);
    Ok(())
}

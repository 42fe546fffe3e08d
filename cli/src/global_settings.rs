use clap::{Arg, ArgMatches, arg};
use ranges_lib::Formatter;

/// Which bound type the ranges on the command line use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    TimeOfDay, // 22:00:00..06:00:00
    Date,      // 2024-01-01..2024-01-10
    DateTime,  // 2024-01-01T08:00:00..2024-01-01T09:00:00
}

pub struct GlobalSettings {
    pub kind: Kind,

    // How to display ranges
    pub format: Formatter,

    // -v count, or -1 for --quiet
    pub verbosity: i8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--kind <KIND> "Type of the range bounds")
                .value_parser(["time", "date", "datetime"])
                .required(false)
                .default_value("time")
                .global(true),
            arg!(--format <PATTERN> "strftime pattern to display bounds")
                .required(false)
                .global(true),
            arg!(-v --verbose ... "Increase log verbosity").global(true),
            arg!(-q --quiet "Only log errors").global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        let kind = match args.get_one::<String>("kind").map(String::as_str) {
            Some("date") => Kind::Date,
            Some("datetime") => Kind::DateTime,
            _ => Kind::TimeOfDay,
        };
        let format = match args.get_one::<String>("format") {
            None => Formatter::default(),
            Some(p) => Formatter::with_pattern(p),
        };
        let verbosity = if args.get_flag("quiet") {
            -1
        } else {
            args.get_count("verbose").min(3) as i8
        };
        GlobalSettings {
            kind,
            format,
            verbosity,
        }
    }

    /// Install the logger.  The RANGES_LOG environment variable is applied
    /// first, and overridden by -v or -q.
    pub fn init_logging(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Warn);
        builder.parse_env("RANGES_LOG");
        match self.verbosity {
            -1 => {
                builder.filter_level(log::LevelFilter::Error);
            }
            1 => {
                builder.filter_level(log::LevelFilter::Info);
            }
            2 => {
                builder.filter_level(log::LevelFilter::Debug);
            }
            3 => {
                builder.filter_level(log::LevelFilter::Trace);
            }
            _ => {}
        }
        builder.init();
    }
}

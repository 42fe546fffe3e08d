use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg};

fn two_ranges(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(arg!(<A> "First range, as START..END"))
        .arg(arg!(<B> "Second range, as START..END"))
}

pub(crate) fn build_cli() -> Command {
    Command::new("ranges")
        .version("0.1")
        .about("Compute unions, intersections and complements of time ranges")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(two_ranges("overlaps", "Whether the two ranges overlap"))
        .subcommand(two_ranges("contiguous", "Whether the two ranges touch"))
        .subcommand(two_ranges("merge", "Merge two ranges into one"))
        .subcommand(two_ranges("intersect", "Values common to both ranges"))
        .subcommand(
            Command::new("complement")
                .about("Everything not in the range (time of day only)")
                .arg(arg!(<A> "Range, as START..END")),
        )
        .subcommand(
            Command::new("union")
                .about("Combine any number of ranges")
                .arg(
                    Arg::new("ranges")
                        .value_name("RANGE")
                        .help("Ranges, as START..END")
                        .num_args(1..)
                        .required(true),
                ),
        )
        .subcommand(
            // Use    eval "$(ranges completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

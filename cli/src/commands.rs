use crate::global_settings::GlobalSettings;
use crate::parsing::{parse_circular, parse_linear};
use anyhow::{Result, bail};
use clap::ArgMatches;
use itertools::Itertools;
use ranges_lib::formatters::FormatBound;
use ranges_lib::{
    CircularRange, CyclicBound, Error, LinearBound, LinearRange, Mergeable,
    RangeSet,
};
use std::fmt::Display;
use std::str::FromStr;

/// What the command line needs from each kind of range
pub trait Algebra: Mergeable + Ord + Copy + Display {
    fn parse(text: &str) -> Result<Self>;
    fn merged(&self, other: &Self) -> Result<Self, Error>;
    fn intersected(&self, other: &Self) -> Self;

    /// None when the range type has no complement
    fn complemented(&self) -> Option<Self>;
}

impl<B> Algebra for LinearRange<B>
where
    B: LinearBound + FromStr,
    B::Err: std::error::Error + Send + Sync + 'static,
{
    fn parse(text: &str) -> Result<Self> {
        parse_linear(text)
    }
    fn merged(&self, other: &Self) -> Result<Self, Error> {
        self.merge(other)
    }
    fn intersected(&self, other: &Self) -> Self {
        self.intersect(other)
    }
    fn complemented(&self) -> Option<Self> {
        None
    }
}

impl<B> Algebra for CircularRange<B>
where
    B: CyclicBound + FromStr,
    B::Err: std::error::Error + Send + Sync + 'static,
{
    fn parse(text: &str) -> Result<Self> {
        parse_circular(text)
    }
    fn merged(&self, other: &Self) -> Result<Self, Error> {
        Ok(self.merge(other))
    }
    fn intersected(&self, other: &Self) -> Self {
        self.intersect(other)
    }
    fn complemented(&self) -> Option<Self> {
        Some(self.complement())
    }
}

/// Execute one of the range subcommands, and return the text to display
pub fn run<R>(
    settings: &GlobalSettings,
    command: &str,
    args: &ArgMatches,
) -> Result<String>
where
    R: Algebra,
    R::Bound: FormatBound,
{
    let range = |id: &str| -> Result<R> {
        let text = args.get_one::<String>(id).map(String::as_str);
        R::parse(text.unwrap_or_default())
    };
    let show = |r: &R| -> Result<String> { Ok(settings.format.display(r)?) };

    match command {
        "overlaps" => Ok(range("A")?.overlaps_range(&range("B")?).to_string()),
        "contiguous" => {
            Ok(range("A")?.is_contiguous_with(&range("B")?).to_string())
        }
        "merge" => show(&range("A")?.merged(&range("B")?)?),
        "intersect" => show(&range("A")?.intersected(&range("B")?)),
        "complement" => match range("A")?.complemented() {
            Some(c) => show(&c),
            None => bail!("complement is only available for time of day"),
        },
        "union" => {
            let set = args
                .get_many::<String>("ranges")
                .into_iter()
                .flatten()
                .map(|text| R::parse(text))
                .collect::<Result<Vec<R>>>()?
                .into_iter()
                .collect::<RangeSet<R>>();
            log::info!("union has {} range(s)", set.len());
            if set.is_empty() {
                Ok("empty".to_string())
            } else {
                let shown = set.iter().map(show).collect::<Result<Vec<_>>>()?;
                Ok(shown.iter().join(", "))
            }
        }
        _ => bail!("unknown command {}", command),
    }
}

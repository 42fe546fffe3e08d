use anyhow::{Context, Result, bail};
use ranges_lib::{CircularRange, CyclicBound, LinearBound, LinearRange};
use std::str::FromStr;

/// Split "START..END" into its two bounds
fn split_bounds<B>(text: &str) -> Result<(B, B)>
where
    B: FromStr,
    B::Err: std::error::Error + Send + Sync + 'static,
{
    let Some((start, end)) = text.split_once("..") else {
        bail!("invalid range {:?}, expected START..END", text);
    };
    let start = start
        .trim()
        .parse::<B>()
        .with_context(|| format!("invalid start in range {:?}", text))?;
    let end = end
        .trim()
        .parse::<B>()
        .with_context(|| format!("invalid end in range {:?}", text))?;
    Ok((start, end))
}

pub fn parse_linear<B>(text: &str) -> Result<LinearRange<B>>
where
    B: LinearBound + FromStr,
    B::Err: std::error::Error + Send + Sync + 'static,
{
    let (start, end) = split_bounds(text)?;
    Ok(LinearRange::new(start, end)?)
}

pub fn parse_circular<B>(text: &str) -> Result<CircularRange<B>>
where
    B: CyclicBound + FromStr,
    B::Err: std::error::Error + Send + Sync + 'static,
{
    let (start, end) = split_bounds(text)?;
    Ok(CircularRange::new(start, end))
}

use crate::capabilities::{CanBeEmpty, Range};
use crate::errors::Error;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::{Display, Write};

/// Bounds that can be rendered with a strftime-like pattern, for instance
/// "%H:%M" or "%d/%m/%Y".
pub trait FormatBound: Display {
    fn format_with(&self, pattern: &str, into: &mut String) -> std::fmt::Result;
}

macro_rules! chrono_format_bound {
    ($($t:ty),*) => {
        $(
            impl FormatBound for $t {
                fn format_with(
                    &self,
                    pattern: &str,
                    into: &mut String,
                ) -> std::fmt::Result {
                    write!(into, "{}", self.format(pattern))
                }
            }
        )*
    };
}
chrono_format_bound!(NaiveDateTime, NaiveDate, NaiveTime);

/// How to display empty ranges
#[derive(Clone, Copy, Default)]
pub enum Empty {
    #[default]
    SinglePoint,           // the bound, as for any zero-width range
    Replace(&'static str), // display a specific text instead (e.g. "-")
}

pub struct Formatter {
    pub pattern: Option<String>, // None to use the bound's Display
    pub separator: String,
    pub empty: Empty,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            pattern: None,
            separator: " - ".to_string(),
            empty: Empty::default(),
        }
    }
}

impl Formatter {
    pub fn with_pattern(pattern: &str) -> Self {
        Self {
            pattern: Some(pattern.to_string()),
            ..Self::default()
        }
    }

    fn push_bound<B: FormatBound>(
        &self,
        into: &mut String,
        bound: &B,
    ) -> Result<(), Error> {
        let written = match &self.pattern {
            None => write!(into, "{}", bound),
            Some(p) => bound.format_with(p, into),
        };
        written.map_err(|_| {
            Error::Format(self.pattern.clone().unwrap_or_default())
        })
    }

    /// Display a range as "start - end", or a single bound when both are
    /// equal.
    pub fn display<R>(&self, range: &R) -> Result<String, Error>
    where
        R: Range + CanBeEmpty,
        R::Bound: FormatBound,
    {
        let mut result = String::new();
        if range.is_empty() {
            match self.empty {
                Empty::SinglePoint => self.push_bound(&mut result, &range.start())?,
                Empty::Replace(text) => result.push_str(text),
            }
        } else {
            self.push_bound(&mut result, &range.start())?;
            result.push_str(&self.separator);
            self.push_bound(&mut result, &range.end())?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use crate::circular_ranges::TimeOfDayRange;
    use crate::capabilities::CanBeEmpty;
    use crate::errors::Error;
    use crate::formatters::{Empty, Formatter};
    use crate::linear_ranges::{DateRange, DateTimeRange};
    use chrono::{NaiveDate, NaiveTime};

    fn hm(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_display() {
        let night = TimeOfDayRange::new(hm(22, 0), hm(6, 30));
        let f = Formatter::default();
        assert_eq!(f.display(&night), Ok("22:00:00 - 06:30:00".to_string()));

        let f = Formatter::with_pattern("%H:%M");
        assert_eq!(f.display(&night), Ok("22:00 - 06:30".to_string()));
        assert_eq!(
            f.display(&TimeOfDayRange::new(hm(8, 0), hm(8, 0))),
            Ok("08:00".to_string()),
        );

        let f = Formatter {
            pattern: Some("%d/%m/%Y".to_string()),
            separator: " to ".to_string(),
            empty: Empty::Replace("-"),
        };
        let jan = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();
        assert_eq!(f.display(&jan), Ok("01/01/2024 to 31/01/2024".to_string()));
        assert_eq!(f.display(&DateRange::empty()), Ok("-".to_string()));

        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let meeting = DateTimeRange::new(day.and_time(hm(9, 0)), day.and_time(hm(10, 30)))
            .unwrap();
        assert_eq!(
            Formatter::with_pattern("%d/%m %H:%M").display(&meeting),
            Ok("01/03 09:00 - 01/03 10:30".to_string()),
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let f = Formatter::with_pattern("%Q");
        assert_eq!(
            f.display(&TimeOfDayRange::new(hm(1, 0), hm(2, 0))),
            Err(Error::Format("%Q".to_string())),
        );
    }
}

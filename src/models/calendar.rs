//! Calendar month representation
//!
//! Goals are planned at month granularity. `MonthYear` carries the month
//! rollover arithmetic used by the finish-date projection.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month labels, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month in a given year (month is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

impl Ord for MonthYear {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for MonthYear {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl MonthYear {
    /// Create a month, validating that it falls within 1..=12
    pub fn new(month: u32, year: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        Ok(Self { month, year })
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    /// Add `months` to this month, where adding 0 stays put.
    /// `None` if the year would overflow.
    pub fn add_months(&self, months: u32) -> Option<Self> {
        let total = (self.month as i64 - 1) + months as i64;
        let years = i32::try_from(total / 12).ok()?;
        Some(Self {
            month: (total % 12) as u32 + 1,
            year: self.year.checked_add(years)?,
        })
    }

    /// The month in which a plan of `duration` months ends, counting the
    /// start month itself as the first month. `None` for a zero duration
    /// or a finish year past `i32::MAX`.
    pub fn finish_after(&self, duration: u32) -> Option<Self> {
        if duration == 0 {
            return None;
        }
        self.add_months(duration - 1)
    }

    /// Full English month name
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Human-friendly form used on goal cards, e.g. "March/2024"
    pub fn label(&self) -> String {
        format!("{}/{}", self.month_name(), self.year)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthYear {
    type Err = CalendarError;

    /// Parse "YYYY-MM" (or "YYYY/MM")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .or_else(|| s.split_once('/'))
            .ok_or_else(|| CalendarError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| CalendarError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| CalendarError::InvalidFormat(s.to_string()))?;

        Self::new(month, year)
    }
}

/// The selectable start years: `len` consecutive years from `current_year`
pub fn year_window(current_year: i32, len: u32) -> Vec<i32> {
    (0..len)
        .map_while(|offset| i32::try_from(offset).ok()?.checked_add(current_year))
        .collect()
}

/// Calendar errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    MonthOutOfRange(u32),
    InvalidFormat(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthOutOfRange(m) => write!(f, "Month must be between 1 and 12, got {}", m),
            Self::InvalidFormat(s) => write!(f, "Invalid month '{}'. Use YYYY-MM", s),
        }
    }
}

impl std::error::Error for CalendarError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn my(month: u32, year: i32) -> MonthYear {
        MonthYear::new(month, year).unwrap()
    }

    #[test]
    fn test_new_validates_month() {
        assert!(MonthYear::new(1, 2024).is_ok());
        assert!(MonthYear::new(12, 2024).is_ok());
        assert_eq!(
            MonthYear::new(0, 2024),
            Err(CalendarError::MonthOutOfRange(0))
        );
        assert_eq!(
            MonthYear::new(13, 2024),
            Err(CalendarError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn test_add_months_rollover() {
        assert_eq!(my(1, 2024).add_months(0), Some(my(1, 2024)));
        assert_eq!(my(11, 2024).add_months(1), Some(my(12, 2024)));
        assert_eq!(my(12, 2024).add_months(1), Some(my(1, 2025)));
        assert_eq!(my(12, 2024).add_months(12), Some(my(12, 2025)));
        assert_eq!(my(6, 2024).add_months(30), Some(my(12, 2026)));
    }

    #[test]
    fn test_add_months_year_overflow() {
        assert_eq!(my(1, i32::MAX).add_months(11), Some(my(12, i32::MAX)));
        assert_eq!(my(1, i32::MAX).add_months(12), None);
        assert_eq!(my(1, i32::MAX).finish_after(13), None);
        assert_eq!(my(12, i32::MAX).finish_after(2), None);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(my(1, 2025) > my(12, 2024));
        assert!(my(3, 2024) < my(4, 2024));
        let mut months = vec![my(2, 2025), my(12, 2024), my(1, 2025)];
        months.sort();
        assert_eq!(months, vec![my(12, 2024), my(1, 2025), my(2, 2025)]);
    }

    #[test]
    fn test_finish_after() {
        assert_eq!(my(12, 2024).finish_after(1), Some(my(12, 2024)));
        assert_eq!(my(12, 2024).finish_after(2), Some(my(1, 2025)));
        assert_eq!(my(1, 2024).finish_after(12), Some(my(12, 2024)));
        assert_eq!(my(1, 2024).finish_after(13), Some(my(1, 2025)));
        assert_eq!(my(1, 2024).finish_after(0), None);
    }

    #[test]
    fn test_finish_month_always_in_range() {
        for month in 1..=12 {
            for duration in 1..=240 {
                let finish = my(month, 2024).finish_after(duration).unwrap();
                assert!((1..=12).contains(&finish.month));
                assert!(finish >= my(month, 2024));
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(my(3, 2024).month_name(), "March");
        assert_eq!(my(12, 2025).label(), "December/2025");
        assert_eq!(my(3, 2024).to_string(), "2024-03");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-03".parse::<MonthYear>().unwrap(), my(3, 2024));
        assert_eq!("2025/12".parse::<MonthYear>().unwrap(), my(12, 2025));
        assert!("2024-13".parse::<MonthYear>().is_err());
        assert!("March 2024".parse::<MonthYear>().is_err());
    }

    #[test]
    fn test_year_window() {
        let years = year_window(2026, 20);
        assert_eq!(years.len(), 20);
        assert_eq!(years[0], 2026);
        assert_eq!(years[19], 2045);
        assert!(year_window(2026, 0).is_empty());
        assert_eq!(year_window(i32::MAX - 1, 5), vec![i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&my(4, 2024)).unwrap();
        assert_eq!(json, r#"{"month":4,"year":2024}"#);
    }
}

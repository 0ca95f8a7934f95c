//! Free-text expiration parsing.
//!
//! Recognition and lookup collaborators describe shelf life in whatever shape
//! they like: `"2025-10-05"`, `"10/05/2025"`, `"Oct 5"`, `"about 2 weeks"`,
//! `"5"`. This module turns such text into a concrete date relative to a
//! reference day, or reports that it could not.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. `YYYY-MM-DD` / `YYYY/MM/DD` anywhere in the text
//! 2. `MM/DD/YYYY` / `MM-DD-YYYY`
//! 3. relative durations (`N days`, `N weeks`, `N months`)
//! 4. month-name dates (`Oct 5, 2025`, `5 december`), year defaulting to the
//!    reference year
//! 5. a bare integer, taken as days only when `<= 365`
//! 6. the first embedded integer in `1..=365`, taken as days
//!
//! Numeric dates beat durations, so `"2025-10-05 (7 days)"` resolves to the
//! fifth of October. Durations beat month names, since `may` is also a plain
//! word.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::{Captures, Regex};

pub const DAYS_PER_WEEK: u64 = 7;
/// Months are approximated as thirty days.
pub const DAYS_PER_MONTH: u64 = 30;
/// Largest bare integer accepted as a day count. Anything above is more
/// likely a year than a shelf life.
pub const MAX_BARE_DAY_COUNT: u64 = 365;

const MONTH_NAMES: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static ISO_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})[-/](\d{1,2})[-/](\d{1,2})\b").ok());

static US_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{4})\b").ok());

static MONTH_FIRST_DATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Oct 5 | October 5th, 2025 | dec. 24 2026
    Regex::new(&format!(
        r"(?i)\b({MONTH_NAMES})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(\d{{4}})\b)?"
    ))
    .ok()
});

static DAY_FIRST_DATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // 5 oct | 5th of October 2025
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTH_NAMES})\b\.?(?:,?\s+(\d{{4}})\b)?"
    ))
    .ok()
});

static RELATIVE_DURATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // 7 days | 2 weeks | 3-5 days | 1 to 2 months | 10-day
    Regex::new(r"(?i)\b(\d+)(?:\s*(?:-|to)\s*\d+)?[\s-]*(days?|weeks?|months?)\b").ok()
});

static BARE_INTEGER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+$").ok());

static EMBEDDED_INTEGER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// Intermediate parse result: either an absolute date or an offset in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDuration {
    Date(NaiveDate),
    Days(u64),
}

impl ParsedDuration {
    /// Anchors the duration to a reference day. `None` on calendar overflow.
    pub fn resolve(self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            ParsedDuration::Date(date) => Some(date),
            ParsedDuration::Days(days) => reference.checked_add_days(Days::new(days)),
        }
    }
}

/// Outcome of parsing a free-text expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedExpiry {
    Resolved(NaiveDate),
    Unresolved,
}

impl ParsedExpiry {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            ParsedExpiry::Resolved(date) => Some(date),
            ParsedExpiry::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, ParsedExpiry::Resolved(_))
    }

    /// Days between `reference` and the resolved date, clamped at zero so a
    /// date already in the past becomes an empty shelf life.
    pub fn shelf_life_days(self, reference: NaiveDate) -> Option<u32> {
        let date = self.date()?;
        let days = (date - reference).num_days().max(0);
        Some(u32::try_from(days).unwrap_or(u32::MAX))
    }
}

/// Parses `raw` against `reference`. Blank text is unresolved, never an error.
pub fn parse(raw: &str, reference: NaiveDate) -> ParsedExpiry {
    parse_duration(raw, reference)
        .and_then(|duration| duration.resolve(reference))
        .map_or(ParsedExpiry::Unresolved, ParsedExpiry::Resolved)
}

/// Convenience for optional collaborator fields.
pub fn parse_optional(raw: Option<&str>, reference: NaiveDate) -> ParsedExpiry {
    raw.map_or(ParsedExpiry::Unresolved, |text| parse(text, reference))
}

pub fn parse_duration(raw: &str, reference: NaiveDate) -> Option<ParsedDuration> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = iso_date(text).or_else(|| us_date(text)) {
        return Some(ParsedDuration::Date(date));
    }

    if let Some(days) = relative_duration(text) {
        return Some(ParsedDuration::Days(days));
    }

    if let Some(date) = month_name_date(text, reference.year()) {
        return Some(ParsedDuration::Date(date));
    }

    if is_bare_integer(text) {
        return text
            .parse::<u64>()
            .ok()
            .filter(|days| *days <= MAX_BARE_DAY_COUNT)
            .map(ParsedDuration::Days);
    }

    first_plausible_day_count(text).map(ParsedDuration::Days)
}

fn iso_date(text: &str) -> Option<NaiveDate> {
    let pattern = ISO_DATE.as_ref()?;
    pattern.captures_iter(text).find_map(|caps| {
        let year = capture_number(&caps, 1)?;
        let month = capture_number(&caps, 2)?;
        let day = capture_number(&caps, 3)?;
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    })
}

fn us_date(text: &str) -> Option<NaiveDate> {
    let pattern = US_DATE.as_ref()?;
    pattern.captures_iter(text).find_map(|caps| {
        let month = capture_number(&caps, 1)?;
        let day = capture_number(&caps, 2)?;
        let year = capture_number(&caps, 3)?;
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    })
}

fn month_name_date(text: &str, default_year: i32) -> Option<NaiveDate> {
    let month_first = MONTH_FIRST_DATE.as_ref().and_then(|pattern| {
        pattern.captures_iter(text).find_map(|caps| {
            let month = month_number(caps.get(1)?.as_str())?;
            let day = capture_number(&caps, 2)?;
            let year = capture_number(&caps, 3).unwrap_or(default_year);
            NaiveDate::from_ymd_opt(year, month, day as u32)
        })
    });
    if month_first.is_some() {
        return month_first;
    }

    DAY_FIRST_DATE.as_ref().and_then(|pattern| {
        pattern.captures_iter(text).find_map(|caps| {
            let day = capture_number(&caps, 1)?;
            let month = month_number(caps.get(2)?.as_str())?;
            let year = capture_number(&caps, 3).unwrap_or(default_year);
            NaiveDate::from_ymd_opt(year, month, day as u32)
        })
    })
}

fn relative_duration(text: &str) -> Option<u64> {
    let pattern = RELATIVE_DURATION.as_ref()?;
    pattern.captures_iter(text).find_map(|caps| {
        let amount = caps.get(1)?.as_str().parse::<u64>().ok()?;
        let unit = caps.get(2)?.as_str().to_lowercase();
        let multiplier = if unit.starts_with("week") {
            DAYS_PER_WEEK
        } else if unit.starts_with("month") {
            DAYS_PER_MONTH
        } else {
            1
        };
        amount.checked_mul(multiplier)
    })
}

fn is_bare_integer(text: &str) -> bool {
    BARE_INTEGER
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text))
}

fn first_plausible_day_count(text: &str) -> Option<u64> {
    let pattern = EMBEDDED_INTEGER.as_ref()?;
    pattern
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .find(|days| (1..=MAX_BARE_DAY_COUNT).contains(days))
}

fn capture_number(caps: &Captures<'_>, index: usize) -> Option<i32> {
    caps.get(index)?.as_str().parse().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

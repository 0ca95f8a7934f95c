use chrono::NaiveDate;

use super::duration_parser::parse_optional;
use super::model::clamp_shelf_life;

/// Used when neither the caller, the catalog nor the external lookup knows.
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// Where a shelf-life value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    Explicit,
    Catalog,
    External,
    Default,
}

impl std::fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateSource::Explicit => write!(f, "explicit"),
            EstimateSource::Catalog => write!(f, "catalog"),
            EstimateSource::External => write!(f, "external"),
            EstimateSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLifeEstimate {
    pub days: u32,
    pub source: EstimateSource,
}

impl ShelfLifeEstimate {
    pub fn new(days: u32, source: EstimateSource) -> Self {
        Self { days, source }
    }

    pub fn fallback(days: u32) -> Self {
        Self::new(days, EstimateSource::Default)
    }
}

/// First stage of the shelf-life chain: whatever the caller already knows.
///
/// An explicit day count wins over raw text. Raw text only counts when the
/// duration parser resolves it.
pub fn resolve_explicit(
    shelf_life_days: Option<i64>,
    raw_expiration: Option<&str>,
    today: NaiveDate,
) -> Option<ShelfLifeEstimate> {
    if let Some(days) = shelf_life_days {
        return Some(ShelfLifeEstimate::new(
            clamp_shelf_life(days),
            EstimateSource::Explicit,
        ));
    }

    parse_optional(raw_expiration, today)
        .shelf_life_days(today)
        .map(|days| ShelfLifeEstimate::new(days, EstimateSource::Explicit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn should_prefer_explicit_day_count_over_raw_text() {
        let estimate = resolve_explicit(Some(4), Some("2 weeks"), today()).unwrap();
        assert_eq!(estimate, ShelfLifeEstimate::new(4, EstimateSource::Explicit));
    }

    #[test]
    fn should_clamp_negative_explicit_day_count() {
        let estimate = resolve_explicit(Some(-2), None, today()).unwrap();
        assert_eq!(estimate.days, 0);
    }

    #[test]
    fn should_convert_parsed_date_to_days_from_today() {
        let estimate = resolve_explicit(None, Some("2025-03-11"), today()).unwrap();
        assert_eq!(estimate.days, 10);
    }

    #[test]
    fn should_return_none_when_raw_text_does_not_parse() {
        assert!(resolve_explicit(None, Some("no label"), today()).is_none());
        assert!(resolve_explicit(None, None, today()).is_none());
    }
}

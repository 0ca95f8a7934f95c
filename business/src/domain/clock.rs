use chrono::NaiveDate;

/// Source of "today" for aging computations.
///
/// Shelf life is counted in whole calendar days, so the port only exposes the
/// local date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

use business::domain::clock::Clock;
use chrono::{Local, NaiveDate};

/// Today's date in the server's local time zone.
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

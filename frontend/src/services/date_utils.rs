use chrono::{NaiveDate, Utc};

/// Today's date in UTC, used to stamp new expenses
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

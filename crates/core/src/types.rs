/// Numeric primary key assigned by the CMS.
pub type EntryId = i64;

/// All CMS timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Publication dates carry no time component.
pub type PublishDate = chrono::NaiveDate;

//! Contact directory: the name-keyed collection of contact records and the
//! upcoming-birthday query.
//!
//! # Upcoming birthdays
//!
//! For each record with a birthday, the anniversary is placed in `today`'s
//! year. An anniversary that already passed is pushed forward by a fixed
//! 365 days (not one calendar year, so across a leap day it lands one day
//! early). Anniversaries on a Saturday or Sunday are greeted on the
//! following Monday. A contact is included when the greeting date is
//! between `today` and `window_days` days ahead, both ends included.

use crate::domain::name::capitalize;
use crate::domain::ContactName;
use crate::models::ContactRecord;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Default look-ahead for [`ContactDirectory::get_upcoming_birthdays`].
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Offset applied to anniversaries that already passed this year.
const ROLLOVER_DAYS: u64 = 365;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Canonical contact name
    pub name: String,

    /// Date to congratulate on, after moving weekends to Monday
    pub date: NaiveDate,

    /// Days between today and `date`
    pub days_until: i64,
}

/// Name-keyed collection owning every contact record.
///
/// Keys are always the canonical form of the record's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: HashMap<String, ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key, record);
        if let Some(ref old) = previous {
            debug!("Replaced existing record for {}", old.name());
        }
        previous
    }

    /// Exact lookup on the canonical form of `name`.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(&Self::key(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(&Self::key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&Self::key(name))
    }

    /// Remove the record for `name`.
    ///
    /// A missing name logs a notice and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(&Self::key(name));
        if removed.is_none() {
            warn!("{} does not exist", name);
        }
        removed
    }

    /// All records, sorted by name.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        let mut records: Vec<&ContactRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records.into_iter()
    }

    /// Contacts to congratulate within the next [`UPCOMING_WINDOW_DAYS`] days.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Contacts whose greeting date is `0..=window_days` days after `today`.
    ///
    /// Results are sorted by greeting date, then by name.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = greeting_date(birthday.date(), today)?;
                let days_until = (date - today).num_days();
                (0..=window_days).contains(&days_until).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                    days_until,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        debug!(
            "{} upcoming birthdays within {} days of {}",
            upcoming.len(),
            window_days,
            today
        );
        upcoming
    }

    fn key(name: &str) -> String {
        capitalize(name.trim())
    }
}

/// The birthday's anniversary in `year`; Feb 29 falls back to Feb 28.
fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
}

/// The day to congratulate on, relative to `today`.
fn greeting_date(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut date = anniversary_in(birthday, today.year())?;
    if date < today {
        date = date.checked_add_days(Days::new(ROLLOVER_DAYS))?;
    }
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

impl fmt::Display for ContactDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

// Serde support - serialize as an array of records
impl Serialize for ContactDirectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records())
    }
}

// Serde support - rebuild the keyed map, rejecting repeated names
impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Vec<ContactRecord> = Vec::deserialize(deserializer)?;
        let mut directory = ContactDirectory::new();
        for record in entries {
            let name: &ContactName = record.name();
            if directory.contains(name.as_str()) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate contact name: {}",
                    name
                )));
            }
            directory.add_record(record);
        }
        Ok(directory)
    }
}

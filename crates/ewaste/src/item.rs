//! Tracked device records.
//!
//! An [`Item`] is one piece of electronic equipment together with the date it
//! should be replaced. The replacement date is derived once, at construction,
//! from the purchase date and the expected lifetime using a fixed 365-day year.

use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Text format for every date this crate reads or writes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days counted per year of expected lifetime. Leap years are not considered.
pub const DAYS_PER_YEAR: i64 = 365;

/// A tracked electronic device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    purchase_date: NaiveDate,
    expected_lifetime: i64,
    replacement_date: NaiveDate,
}

/// Flat, serializable view of an [`Item`].
///
/// `due_for_replacement` is evaluated when the record is produced; it is not
/// part of the item's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Device name.
    pub name: String,
    /// Purchase date as `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Expected lifetime in years.
    pub expected_lifetime: i64,
    /// Replacement date as `YYYY-MM-DD`.
    pub replacement_date: String,
    /// Whether the item was due at the time the record was produced.
    pub due_for_replacement: bool,
}

impl Item {
    /// Create an item from a `YYYY-MM-DD` purchase date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateParse`] if `purchase_date` is malformed, or
    /// [`Error::LifetimeOutOfRange`] if the replacement date cannot be
    /// represented.
    pub fn new(name: impl Into<String>, purchase_date: &str, expected_lifetime: i64) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(purchase_date, DATE_FORMAT)
            .map_err(|source| Error::date_parse(purchase_date, source))?;
        Self::from_date(name, parsed, expected_lifetime)
    }

    /// Create an item from an already-parsed purchase date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LifetimeOutOfRange`] if the replacement date cannot be
    /// represented.
    pub fn from_date(
        name: impl Into<String>,
        purchase_date: NaiveDate,
        expected_lifetime: i64,
    ) -> Result<Self> {
        let name = name.into();
        let Some(replacement_date) = replacement_date_for(purchase_date, expected_lifetime) else {
            return Err(Error::LifetimeOutOfRange {
                name,
                expected_lifetime,
            });
        };

        Ok(Self {
            name,
            purchase_date,
            expected_lifetime,
            replacement_date,
        })
    }

    /// Device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date the device was purchased.
    #[must_use]
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Expected lifetime in years. Negative lifetimes put the replacement
    /// date before the purchase date.
    #[must_use]
    pub fn expected_lifetime(&self) -> i64 {
        self.expected_lifetime
    }

    /// Date the device should be replaced.
    #[must_use]
    pub fn replacement_date(&self) -> NaiveDate {
        self.replacement_date
    }

    /// Check whether the item is due for replacement right now.
    #[must_use]
    pub fn is_due_for_replacement(&self) -> bool {
        self.is_due_at(now())
    }

    /// Check whether the item is due at the given local time.
    ///
    /// The replacement date is due from midnight onwards; the boundary instant
    /// itself counts as due.
    #[must_use]
    pub fn is_due_at(&self, now: NaiveDateTime) -> bool {
        now >= self.replacement_instant()
    }

    /// Whole days until replacement from right now. Negative once overdue.
    #[must_use]
    pub fn days_until_replacement(&self) -> i64 {
        self.days_until_at(now())
    }

    /// Whole days until replacement from the given local time, truncated toward zero.
    #[must_use]
    pub fn days_until_at(&self, now: NaiveDateTime) -> i64 {
        (self.replacement_instant() - now).num_days()
    }

    /// Flatten into a record, evaluating the due flag right now.
    #[must_use]
    pub fn to_record(&self) -> ItemRecord {
        self.to_record_at(now())
    }

    /// Flatten into a record, evaluating the due flag at the given local time.
    #[must_use]
    pub fn to_record_at(&self, now: NaiveDateTime) -> ItemRecord {
        ItemRecord {
            name: self.name.clone(),
            purchase_date: self.purchase_date.format(DATE_FORMAT).to_string(),
            expected_lifetime: self.expected_lifetime,
            replacement_date: self.replacement_date.format(DATE_FORMAT).to_string(),
            due_for_replacement: self.is_due_at(now),
        }
    }

    fn replacement_instant(&self) -> NaiveDateTime {
        self.replacement_date.and_time(NaiveTime::MIN)
    }
}

/// `purchase_date + expected_lifetime * 365` days, or `None` past the calendar range.
#[must_use]
pub fn replacement_date_for(purchase_date: NaiveDate, expected_lifetime: i64) -> Option<NaiveDate> {
    let days = expected_lifetime.checked_mul(DAYS_PER_YEAR)?;
    let offset = Days::new(days.unsigned_abs());
    if days >= 0 {
        purchase_date.checked_add_days(offset)
    } else {
        purchase_date.checked_sub_days(offset)
    }
}

/// Current local wall-clock time.
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

//! Occurrence generation -- expanding a date range plus weekday filter into
//! an ordered list of concrete calendar dates.
//!
//! The walk visits each date of the inclusive range exactly once, so the
//! output is ascending and naturally deduplicated. Ranges are capped at 90
//! days to keep a single bulk request bounded.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Largest inclusive date range one bulk request may cover.
pub const MAX_RANGE_DAYS: i64 = 90;

/// Wire codes for the seven weekdays, Monday first.
const CODES: [(&str, Weekday); 7] = [
    ("MON", Weekday::Mon),
    ("TUE", Weekday::Tue),
    ("WED", Weekday::Wed),
    ("THU", Weekday::Thu),
    ("FRI", Weekday::Fri),
    ("SAT", Weekday::Sat),
    ("SUN", Weekday::Sun),
];

/// A set of weekday flags, serialized as an array of `"MON".."SUN"` codes.
///
/// The presets are pure convenience constructors; membership is the only
/// semantics the set carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every day of the week.
    pub fn all_days() -> Self {
        Self(0b0111_1111)
    }

    /// Monday through Friday.
    pub fn weekdays_only() -> Self {
        Self::from_days(&[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }

    /// Saturday and Sunday.
    pub fn weekends_only() -> Self {
        Self::from_days(&[Weekday::Sat, Weekday::Sun])
    }

    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().fold(Self::empty(), |set, &day| set.with(day))
    }

    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | 1 << day.num_days_from_monday())
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member days, Monday first.
    pub fn days(self) -> Vec<Weekday> {
        CODES
            .iter()
            .map(|&(_, day)| day)
            .filter(|&day| self.contains(day))
            .collect()
    }

    /// Parse a wire code (`"MON"`, case-insensitive) into a weekday.
    pub fn parse_code(code: &str) -> Option<Weekday> {
        let upper = code.to_ascii_uppercase();
        CODES
            .iter()
            .find(|(c, _)| *c == upper)
            .map(|&(_, day)| day)
    }

    /// The wire code for a weekday.
    pub fn code(day: Weekday) -> &'static str {
        CODES[day.num_days_from_monday() as usize].0
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days().into_iter().map(Self::code))
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let codes = Vec::<String>::deserialize(deserializer)?;
        codes.iter().try_fold(Self::empty(), |set, code| {
            Self::parse_code(code)
                .map(|day| set.with(day))
                .ok_or_else(|| D::Error::custom(format!("unknown weekday code: {code:?}")))
        })
    }
}

/// Expand an inclusive date range into the ascending dates whose weekday is
/// in `weekdays`.
///
/// # Errors
/// - `BadInput` when `date_to` precedes `date_from`.
/// - `DateRangeTooLarge` when the inclusive range exceeds
///   [`MAX_RANGE_DAYS`] days (exactly 90 is accepted).
/// - `NoDaysSelected` when the filter is empty.
pub fn expand(
    date_from: NaiveDate,
    date_to: NaiveDate,
    weekdays: WeekdaySet,
) -> Result<Vec<NaiveDate>> {
    if date_to < date_from {
        return Err(ScheduleError::BadInput(format!(
            "date range ends ({date_to}) before it starts ({date_from})"
        )));
    }
    let days = (date_to - date_from).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(ScheduleError::DateRangeTooLarge { days });
    }
    if weekdays.is_empty() {
        return Err(ScheduleError::NoDaysSelected);
    }

    Ok(date_from
        .iter_days()
        .take_while(|date| *date <= date_to)
        .filter(|date| weekdays.contains(date.weekday()))
        .collect())
}

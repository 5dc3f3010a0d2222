//! Validity intervals for the affiliation ledger.
//!
//! Date-range overlap logic is easy to get subtly wrong inside a SQL
//! filter, so the predicate lives here as a plain type that can be unit
//! tested without a database. The storage queries in the affiliation
//! repositories mirror [`Interval::overlaps`] exactly.

use chrono::NaiveDate;

/// A `[from, to]` validity range where `to = None` means "still active".
///
/// Both bounds are inclusive calendar dates, matching how transfer windows
/// are recorded: a player signed on `from` and released on `to` counts as
/// affiliated on both days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl Interval {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// An interval with no end date.
    pub fn open(from: NaiveDate) -> Self {
        Self { from, to: None }
    }

    pub fn is_open(&self) -> bool {
        self.to.is_none()
    }

    /// Whether `day` falls inside the interval.
    pub fn contains(&self, day: NaiveDate) -> bool {
        if day < self.from {
            return false;
        }

        match self.to {
            Some(to) => day <= to,
            None => true,
        }
    }

    /// Interval overlap, not containment: a record that merely brushes the
    /// other range counts. An affiliation opened mid-season and still
    /// active overlaps that season.
    pub fn overlaps(&self, other: &Interval) -> bool {
        let starts_before_other_ends = match other.to {
            Some(other_to) => self.from <= other_to,
            None => true,
        };

        let ends_after_other_starts = match self.to {
            Some(self_to) => self_to >= other.from,
            None => true,
        };

        starts_before_other_ends && ends_after_other_starts
    }
}

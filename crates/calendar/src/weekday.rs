//! Day of the week.

use std::fmt;

use crate::tables::WEEKDAY_NAMES;

/// Day of the week, numbered the way `ordinal % 7` numbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday of an ordinal day number (day 1 is a Monday).
    pub(crate) fn from_ordinal(ordinal: i64) -> Self {
        Self::ALL[ordinal.rem_euclid(7) as usize]
    }

    /// Returns the index of this weekday, Sunday = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name, e.g. `"Saturday"`.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! # ticketdesk-calendar
//!
//! Proleptic Gregorian dates between 1 January 0001 and 31 December 9999,
//! with arithmetic built on ordinal day numbers.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(day, month, year)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     B -->|".to_ordinal()"| C["ordinal (1..=3652059)"]
//!     C -->|"CalendarDate::from_ordinal()"| B
//!     B -->|".add_days() / .sub_days()"| B
//!     C -->|"% 7"| D["Weekday"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ticketdesk_calendar::{CalendarDate, Weekday};
//!
//! let date = CalendarDate::new(1, 1, 2000).unwrap();
//! assert_eq!(date.weekday(), Weekday::Saturday);
//! assert_eq!(date.to_ordinal(), 730_120);
//!
//! let later = date.add_days(60).unwrap();
//! assert_eq!(later.to_string(), "01/03/2000");
//! assert_eq!(later.to_long_string(), "Wednesday, March 1st, 2000");
//! assert_eq!(later.days_since(date), 60);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The `CalendarDate` value type, parsing and formatting |
//! | `ordinal` | Date ↔ ordinal day number conversion |
//! | `tables` | Month lengths, names and leap-year rule |
//! | `weekday` | Day-of-week enum |
//! | `error` | Error types |

mod date;
mod error;
mod ordinal;
mod tables;
mod weekday;

pub use date::{CalendarDate, DateField};
pub use error::{CalendarError, ErrorKind};
pub use tables::{MAX_ORDINAL, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year, month_name};
pub use weekday::Weekday;

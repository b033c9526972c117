//! # ticketdesk-ticket
//!
//! Validated client work tickets built on [`ticketdesk_calendar::CalendarDate`].
//!
//! ## Quick start
//!
//! ```
//! use ticketdesk_ticket::{TrackedTicket, WorkTicket};
//!
//! let mut ticket = WorkTicket::new(1, "AMCE_123", 1, 7, 2014, "Password Reset").unwrap();
//!
//! // Bulk updates are all-or-nothing.
//! assert!(!ticket.update(-1, "BLAGO-042", 13, 32, 11, ""));
//! assert_eq!(ticket.number(), 1);
//!
//! let mut tracked = TrackedTicket::new(ticket);
//! assert!(tracked.close());
//! assert!(!tracked.is_open());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ticket` | `WorkTicket` record, validation and formatting |
//! | `status` | Open/closed lifecycle wrapper |
//! | `entry` | Prompted console entry |
//! | `error` | Error types |

mod entry;
mod error;
mod status;
mod ticket;

pub use entry::TicketReader;
pub use error::{EntryError, TicketError};
pub use status::{TicketStatus, TrackedReport, TrackedTicket};
pub use ticket::{MAX_TICKET_YEAR, MIN_TICKET_YEAR, TicketReport, WorkTicket};

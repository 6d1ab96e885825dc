//! hr-notify: structured facts from HR notification mails.
//!
//! Reads new-hire and termination announcements, extracts the employee's
//! name, the effective date and the activation instant, and assembles
//! deduplicated, filterable record lists.

pub mod config;
pub mod error;
pub mod notify;
pub mod source;

//! Person-name extraction strategies.
//!
//! Each notification type prints the employee's name differently:
//! - new-hire mails carry a table row (`CEP TELEFONU ... <Ad Soyad> POZİSYON`)
//! - termination mails carry a sentence (`... sicili ile çalışan <Ad Soyad> için`)
//!
//! Both strategies share the tokenizer in [`crate::notify::tokens`] and return
//! a [`PersonName`], which is either a miss or 2–6 tokens.

pub mod new_hire;
pub mod termination;

pub use new_hire::NewHireExtractor;
pub use termination::TerminationExtractor;

use crate::notify::types::{EventKind, PersonName};

/// A strategy that finds the subject person's name in a normalized body.
pub trait NameExtractor: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Extract the name, or [`PersonName::miss`] if none is found.
    fn extract(&self, text: &str) -> PersonName;
}

impl EventKind {
    /// The name-extraction strategy for this notification type.
    pub fn name_extractor(&self) -> &'static dyn NameExtractor {
        match self {
            Self::NewHire => &NewHireExtractor,
            Self::Termination => &TerminationExtractor,
        }
    }
}

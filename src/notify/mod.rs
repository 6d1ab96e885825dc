//! HR notification extraction pipeline.
//!
//! Every message in a batch flows through:
//! 1. `body::normalize_body()`: pick a body variant, normalize whitespace
//! 2. `NameExtractor::extract()`: strategy chosen by `EventKind`
//! 3. `date::extract_date()`: effective date, context first
//! 4. `schedule::activation_instant()`: date + 3 days, midnight UTC
//!
//! `RecordAssembler` then applies exclusions, the optional readiness filter
//! and name deduplication. Nothing in here performs I/O or returns errors.

pub mod assembler;
pub mod body;
pub mod date;
pub mod exclusion;
pub mod key;
pub mod names;
pub mod schedule;
pub mod tokens;
pub mod types;

pub use assembler::{Assembly, AssemblyOptions, AssemblyStats, RecordAssembler};
pub use exclusion::ExclusionSet;
pub use key::CanonicalKey;
pub use names::NameExtractor;
pub use types::{BodyVariants, EventKind, OutputRecord, PersonName, RawMessage};

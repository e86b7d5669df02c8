//! Equal-tempered chromatic note table with lookup and comparison.
//!
//! This crate models the Western 12-tone chromatic scale over the A0..C8
//! instrument range. The core is the table generator: it walks the seven
//! letter names per octave, places one enharmonic pair (sharp/flat) in every
//! full-tone gap — the E-F and B-C gaps are half tones and get none —
//! truncates octave 0 to start at A and octave 8 to end at C, and assigns
//! each slot an equal-temperament frequency anchored at A4 = 440 Hz, rounded
//! to 2 decimal places.
//!
//! The table is pure derived data: built once per process, immutable after,
//! and safe to share across any number of concurrent readers.
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use pitchtable::{compare, find, parse, table};
//!
//! // 88 slots, A0 through C8.
//! assert_eq!(table().len(), 88);
//!
//! // Parse a note spec and look it up.
//! let a4 = parse("A4").unwrap();
//! assert_eq!(find(&a4).unwrap().frequency, 440.00);
//!
//! // Enharmonic spellings resolve to the same pitch.
//! let c_sharp = parse("C#4").unwrap();
//! let d_flat = parse("Db4").unwrap();
//! assert_eq!(compare(&c_sharp, &d_flat), Ok(Ordering::Equal));
//!
//! // The truncated range rejects G0 at lookup, not at parse.
//! let g0 = parse("G0").unwrap();
//! assert!(find(&g0).is_err());
//! ```
//!
//! # Modules
//!
//! - [`note`]: note names, accidentals, notes, slots, and the spelling classifier
//! - [`constants`]: letter cycle and tuning constants
//! - [`table`]: the table generator and the memoized canonical table
//! - [`lookup`]: query parsing, table lookup, and pitch comparison
//! - [`error`]: parse and lookup error types

pub mod constants;
pub mod error;
pub mod lookup;
pub mod note;
pub mod table;

// Re-export commonly used items at the crate root
pub use error::{LookupError, ParseError};
pub use lookup::{compare, find, parse, Query};
pub use note::{classify, Accidental, Note, NoteClass, NoteName, Slot};
pub use table::{build_table, table};

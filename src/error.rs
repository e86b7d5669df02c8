//! Error types for note-spec parsing and table lookup.
//!
//! Both kinds are explicit outcomes returned to the caller; nothing in this
//! crate panics on bad input or silently substitutes a nearby note.

use thiserror::Error;

use crate::note::{Accidental, NoteName};

/// A textual note spec failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string does not match the note-spec shape: a letter A-G, an
    /// optional `#`/`b` marker, and one octave digit 0-8.
    #[error("`{0}` is not a note spec (expected letter A-G, optional `#` or `b`, octave digit 0-8)")]
    MalformedSpec(String),

    /// The string is well-formed but names a spelling that does not exist,
    /// such as `E#` or `Cb`.
    #[error("`{name}{accidental}` is not a valid spelling in the 12-tone scale")]
    InvalidSpelling {
        name: NoteName,
        accidental: Accidental,
    },
}

/// A structurally valid query that the truncated table does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The spelling falls outside the A0..C8 range (e.g. `G0` or `D8`).
    #[error("note `{name}{accidental}{octave}` is outside the A0..C8 range")]
    NotFound {
        name: NoteName,
        accidental: Accidental,
        octave: u8,
    },
}

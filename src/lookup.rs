//! Lookup and comparison: parse a note spec, find it in the table, and order
//! two notes by pitch.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, ParseError};
use crate::note::{Accidental, Note, NoteName, Slot};
use crate::table::table;

/// Shape of a textual note spec: letter, optional accidental, octave digit.
const NOTE_SPEC_PATTERN: &str = "^[A-Ga-g](#|[bB])?[0-8]$";

static NOTE_SPEC_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_spec_regex() -> &'static Regex {
    NOTE_SPEC_REGEX.get_or_init(|| Regex::new(NOTE_SPEC_PATTERN).expect("invalid note spec pattern"))
}

/// A lookup key: one spelling, no frequency.
///
/// Queries are cheap per-call values; they are built by [`parse`] (or
/// directly) and consumed by [`find`] and [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: u8,
}

impl Query {
    pub fn new(name: NoteName, accidental: Accidental, octave: u8) -> Self {
        Query {
            name,
            accidental,
            octave,
        }
    }

    /// Shorthand for a natural-note query.
    pub fn natural(name: NoteName, octave: u8) -> Self {
        Query::new(name, Accidental::Natural, octave)
    }

    fn matches(&self, note: &Note) -> bool {
        note.name == self.name && note.accidental == self.accidental && note.octave == self.octave
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.name, self.accidental, self.octave)
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a 2-3 character note spec into a [`Query`].
///
/// The letter is case-insensitive; `#` marks a sharp and `b`/`B` a flat. A
/// well-formed string can still name a spelling the model excludes (`E#`,
/// `Cb`); those fail with [`ParseError::InvalidSpelling`]. Octave range is
/// checked here only against the digit shape; whether the note survives the
/// table's A0..C8 truncation is [`find`]'s concern.
///
/// # Examples
/// ```
/// use pitchtable::{parse, Accidental, NoteName};
///
/// let q = parse("c#4").unwrap();
/// assert_eq!(q.name, NoteName::C);
/// assert_eq!(q.accidental, Accidental::Sharp);
/// assert_eq!(q.octave, 4);
///
/// assert!(parse("H4").is_err());
/// assert!(parse("E#4").is_err());
/// ```
pub fn parse(text: &str) -> Result<Query, ParseError> {
    if !note_spec_regex().is_match(text) {
        return Err(ParseError::MalformedSpec(text.to_string()));
    }

    // The regex pins the shape: ASCII letter, optional marker, one digit.
    let bytes = text.as_bytes();
    let name = NoteName::from_char(bytes[0] as char)
        .ok_or_else(|| ParseError::MalformedSpec(text.to_string()))?;
    let accidental = match bytes.len() {
        2 => Accidental::Natural,
        _ => match bytes[1] {
            b'#' => Accidental::Sharp,
            _ => Accidental::Flat,
        },
    };
    let octave = bytes[bytes.len() - 1] - b'0';

    let spelling_exists = match accidental {
        Accidental::Natural => true,
        Accidental::Sharp => name.has_sharp(),
        Accidental::Flat => name.has_flat(),
    };
    if !spelling_exists {
        return Err(ParseError::InvalidSpelling { name, accidental });
    }

    Ok(Query::new(name, accidental, octave))
}

/// Find the note matching a query in the canonical table.
///
/// Matches a natural slot exactly, or either member of an enharmonic pair,
/// on all of name, accidental, and octave. A valid spelling that truncation
/// excluded (e.g. `G0`) yields [`LookupError::NotFound`].
pub fn find(query: &Query) -> Result<Note, LookupError> {
    table()
        .iter()
        .find_map(|slot| match slot {
            Slot::Natural(note) if query.matches(note) => Some(*note),
            Slot::Pair { sharp, .. } if query.matches(sharp) => Some(*sharp),
            Slot::Pair { flat, .. } if query.matches(flat) => Some(*flat),
            _ => None,
        })
        .ok_or(LookupError::NotFound {
            name: query.name,
            accidental: query.accidental,
            octave: query.octave,
        })
}

/// Order two queries by pitch height.
///
/// Both sides are resolved through [`find`]; a failed lookup propagates
/// rather than producing a partial comparison. Frequencies are rounded at
/// table construction, so `Ordering::Equal` occurs exactly for the two
/// spellings of one enharmonic pair.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use pitchtable::{compare, parse};
///
/// let c4 = parse("C4").unwrap();
/// let a4 = parse("A4").unwrap();
/// assert_eq!(compare(&c4, &a4), Ok(Ordering::Less));
/// ```
pub fn compare(left: &Query, right: &Query) -> Result<Ordering, LookupError> {
    let left = find(left)?;
    let right = find(right)?;
    Ok(left.frequency.total_cmp(&right.frequency))
}

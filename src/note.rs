//! Note model: letter names, accidentals, notes, and table slots.
//!
//! A [`Note`] is an immutable pitch value (spelling plus derived frequency).
//! A [`Slot`] is one position in the chromatic table: either a single natural
//! note or one enharmonic pair sharing a frequency. [`classify`] is the total
//! classifier that decides whether a spelling exists in this model at all.

use serde::{Deserialize, Serialize};

use crate::constants::OCTAVE_MAX;

/// The seven letter names of the diatonic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// Map a letter character to a note name, case-insensitively.
    ///
    /// Anything outside `A`-`G` is rejected up front; no further validation
    /// depends on arbitrary string content.
    ///
    /// # Examples
    /// ```
    /// use pitchtable::NoteName;
    ///
    /// assert_eq!(NoteName::from_char('c'), Some(NoteName::C));
    /// assert_eq!(NoteName::from_char('H'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    /// The next letter in the cycle (B wraps to C).
    pub fn next(self) -> Self {
        match self {
            NoteName::C => NoteName::D,
            NoteName::D => NoteName::E,
            NoteName::E => NoteName::F,
            NoteName::F => NoteName::G,
            NoteName::G => NoteName::A,
            NoteName::A => NoteName::B,
            NoteName::B => NoteName::C,
        }
    }

    /// Whether a sharp of this letter exists as a distinct pitch.
    ///
    /// E and B sit a half tone below the next letter, so E# and B# do not
    /// exist in this model.
    pub fn has_sharp(self) -> bool {
        !matches!(self, NoteName::E | NoteName::B)
    }

    /// Whether a flat of this letter exists as a distinct pitch.
    ///
    /// C and F sit a half tone above the previous letter, so Cb and Fb do
    /// not exist in this model.
    pub fn has_flat(self) -> bool {
        !matches!(self, NoteName::C | NoteName::F)
    }

    /// Semitone offset of the natural letter within its octave (C=0, B=11).
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        };
        write!(f, "{}", letter)
    }
}

/// Accidental applied to a letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl std::fmt::Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        };
        write!(f, "{}", marker)
    }
}

/// A single immutable pitch: spelling plus equal-temperament frequency.
///
/// Notes are constructed by the table generator; `frequency` is derived from
/// the note's position in the table and is never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: u8,
    pub frequency: f64,
}

impl Note {
    pub(crate) fn new(name: NoteName, accidental: Accidental, octave: u8, frequency: f64) -> Self {
        Note {
            name,
            accidental,
            octave,
            frequency,
        }
    }

    /// Semitone position within the octave (C=0 .. B=11), accidental applied.
    pub fn semitone_index(&self) -> u8 {
        let offset: i8 = match self.accidental {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        };
        (self.name.semitone() as i8 + offset).rem_euclid(12) as u8
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.name, self.accidental, self.octave)
    }
}

/// One position in the chromatic table.
///
/// A slot is either a single natural note or one enharmonic pair (two
/// spellings of the same pitch). Each slot advances the table by exactly one
/// semitone; both members of a pair share the slot's octave and frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Slot {
    Natural(Note),
    Pair { sharp: Note, flat: Note },
}

impl Slot {
    /// The octave this slot belongs to.
    pub fn octave(&self) -> u8 {
        match self {
            Slot::Natural(note) => note.octave,
            Slot::Pair { sharp, .. } => sharp.octave,
        }
    }

    /// The frequency of this slot's pitch in Hz.
    pub fn frequency(&self) -> f64 {
        match self {
            Slot::Natural(note) => note.frequency,
            Slot::Pair { sharp, .. } => sharp.frequency,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Natural(note) => write!(f, "{}", note),
            Slot::Pair { sharp, flat } => write!(f, "{}/{}", sharp, flat),
        }
    }
}

/// Classification of a spelling against the note model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteClass {
    /// A plain letter with no accidental.
    Natural,
    /// A sharp spelling of a sharp-eligible letter.
    Sharp,
    /// A flat spelling of a flat-eligible letter.
    Flat,
    /// Not a note in this model (bad spelling or out-of-range octave).
    Invalid,
}

/// Classify a spelling: which variant of the model it is, or [`NoteClass::Invalid`].
///
/// Total and side-effect-free; there is no error case. The checks are the
/// model invariants: accidental eligibility of the letter, octave within
/// 0..=8, octave 0 restricted to A/B (and A#/Bb), octave 8 restricted to
/// natural C.
///
/// # Examples
/// ```
/// use pitchtable::{classify, Accidental, NoteClass, NoteName};
///
/// assert_eq!(classify(NoteName::C, Accidental::Sharp, 4), NoteClass::Sharp);
/// assert_eq!(classify(NoteName::E, Accidental::Sharp, 4), NoteClass::Invalid);
/// assert_eq!(classify(NoteName::G, Accidental::Natural, 0), NoteClass::Invalid);
/// ```
pub fn classify(name: NoteName, accidental: Accidental, octave: u8) -> NoteClass {
    let class = match accidental {
        Accidental::Natural => NoteClass::Natural,
        Accidental::Sharp if name.has_sharp() => NoteClass::Sharp,
        Accidental::Flat if name.has_flat() => NoteClass::Flat,
        _ => return NoteClass::Invalid,
    };

    if octave > OCTAVE_MAX {
        return NoteClass::Invalid;
    }

    // Range truncation: octave 0 holds only A0..B0, octave 8 only C8.
    let in_range = match octave {
        0 => match accidental {
            Accidental::Natural => matches!(name, NoteName::A | NoteName::B),
            Accidental::Sharp => name == NoteName::A,
            Accidental::Flat => name == NoteName::B,
        },
        OCTAVE_MAX => name == NoteName::C && accidental == Accidental::Natural,
        _ => true,
    };

    if in_range {
        class
    } else {
        NoteClass::Invalid
    }
}

//! Table generator: the canonical ascending chromatic table, A0 through C8.
//!
//! The generator is pure and deterministic. It walks the letter cycle per
//! octave, inserts an enharmonic pair wherever two adjacent letters are a
//! full tone apart, truncates to the instrument range, and then assigns each
//! slot an equal-temperament frequency anchored at A4 = 440 Hz.

use std::sync::OnceLock;

use crate::constants::{
    LETTER_CYCLE, OCTAVE_MAX, OCTAVE_MIN, REFERENCE_FREQUENCY, REFERENCE_NAME, REFERENCE_OCTAVE,
    SEMITONES_PER_OCTAVE,
};
use crate::note::{Accidental, Note, NoteName, Slot};

/// A slot spelling before frequency assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spelling {
    Natural(NoteName),
    Pair { sharp: NoteName, flat: NoteName },
}

/// Walk the letter cycle across all octaves, untruncated.
///
/// Between two adjacent letters a full tone apart there is exactly one
/// enharmonic pair (sharp of the lower letter, flat of the upper). E-F and
/// B-C are half-tone adjacent, so `has_sharp` is false there and no pair is
/// emitted. No pair crosses an octave boundary.
fn chromatic_walk() -> Vec<(Spelling, u8)> {
    let mut slots = Vec::new();
    for octave in OCTAVE_MIN..=OCTAVE_MAX {
        for name in LETTER_CYCLE {
            slots.push((Spelling::Natural(name), octave));
            if name.has_sharp() {
                let pair = Spelling::Pair {
                    sharp: name,
                    flat: name.next(),
                };
                slots.push((pair, octave));
            }
        }
    }
    slots
}

/// Range truncation: octave 0 starts at A (keeping the A#/Bb pair between A
/// and B), octave 8 ends at C with no pair above it.
fn in_range(spelling: Spelling, octave: u8) -> bool {
    match octave {
        0 => match spelling {
            Spelling::Natural(name) => matches!(name, NoteName::A | NoteName::B),
            Spelling::Pair { sharp, .. } => sharp == NoteName::A,
        },
        8 => spelling == Spelling::Natural(NoteName::C),
        _ => true,
    }
}

/// Equal-temperament frequency at a signed semitone distance from A4,
/// rounded to 2 decimal places.
fn slot_frequency(semitones_from_reference: i32) -> f64 {
    let exponent = semitones_from_reference as f64 / SEMITONES_PER_OCTAVE as f64;
    let raw = REFERENCE_FREQUENCY * 2f64.powf(exponent);
    (raw * 100.0).round() / 100.0
}

/// Build the canonical table from scratch.
///
/// Pure and deterministic: its inputs are fixed constants, it has no failure
/// mode, and every invocation yields a value-equal sequence. The result is
/// strictly ascending in pitch, one semitone per slot, spanning the 88-slot
/// range A0..C8.
///
/// # Examples
/// ```
/// use pitchtable::build_table;
///
/// let table = build_table();
/// assert_eq!(table.len(), 88);
/// assert_eq!(table[0].to_string(), "A0");
/// assert_eq!(table[87].to_string(), "C8");
/// ```
pub fn build_table() -> Vec<Slot> {
    let spellings: Vec<(Spelling, u8)> = chromatic_walk()
        .into_iter()
        .filter(|&(spelling, octave)| in_range(spelling, octave))
        .collect();

    // Frequencies are anchored at the reference note's position in the
    // truncated sequence, so truncation must already have happened here.
    let reference = spellings
        .iter()
        .position(|&(spelling, octave)| {
            spelling == Spelling::Natural(REFERENCE_NAME) && octave == REFERENCE_OCTAVE
        })
        .expect("reference note missing from table");

    spellings
        .into_iter()
        .enumerate()
        .map(|(i, (spelling, octave))| {
            let frequency = slot_frequency(i as i32 - reference as i32);
            match spelling {
                Spelling::Natural(name) => {
                    Slot::Natural(Note::new(name, Accidental::Natural, octave, frequency))
                }
                Spelling::Pair { sharp, flat } => Slot::Pair {
                    sharp: Note::new(sharp, Accidental::Sharp, octave, frequency),
                    flat: Note::new(flat, Accidental::Flat, octave, frequency),
                },
            }
        })
        .collect()
}

/// The canonical table, computed once per process.
///
/// First access builds the table; concurrent first access is safe and the
/// table is computed at most once. Reads never write, so any number of
/// concurrent callers may hold the returned slice.
pub fn table() -> &'static [Slot] {
    static TABLE: OnceLock<Vec<Slot>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

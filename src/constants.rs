//! Tuning and scale constants.
//!
//! The letter cycle and the reference pitch drive the table generator; they
//! are fixed data, not configuration. The half-tone exceptions (E-F and B-C
//! have no note between them) are encoded on [`NoteName`] itself via
//! `has_sharp`/`has_flat` rather than special-cased in the generator loop.

use crate::note::NoteName;

/// Reference pitch frequency in Hz (A4, concert pitch).
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// Letter of the reference pitch.
pub const REFERENCE_NAME: NoteName = NoteName::A;

/// Octave of the reference pitch.
pub const REFERENCE_OCTAVE: u8 = 4;

/// Lowest octave in range (truncated: starts at A0).
pub const OCTAVE_MIN: u8 = 0;

/// Highest octave in range (truncated: ends at C8).
pub const OCTAVE_MAX: u8 = 8;

/// Semitones per octave in 12-tone equal temperament.
pub const SEMITONES_PER_OCTAVE: u8 = 12;

/// The seven letter names in ascending order within an octave.
pub const LETTER_CYCLE: [NoteName; 7] = [
    NoteName::C,
    NoteName::D,
    NoteName::E,
    NoteName::F,
    NoteName::G,
    NoteName::A,
    NoteName::B,
];

//! Integration tests for the canonical chromatic table.
//!
//! These tests exercise the public API only: table construction invariants,
//! the A0..C8 truncation, equal-temperament frequencies, parsing, lookup,
//! and comparison.

use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use pitchtable::{
    build_table, classify, compare, find, parse, table, Accidental, NoteClass, NoteName, Query,
    Slot,
};

// =============================================================================
// Helper Functions
// =============================================================================

const ALL_NAMES: [NoteName; 7] = [
    NoteName::C,
    NoteName::D,
    NoteName::E,
    NoteName::F,
    NoteName::G,
    NoteName::A,
    NoteName::B,
];

const ALL_ACCIDENTALS: [Accidental; 3] = [Accidental::Natural, Accidental::Sharp, Accidental::Flat];

fn freq(text: &str) -> f64 {
    find(&parse(text).unwrap()).unwrap().frequency
}

// =============================================================================
// Table shape
// =============================================================================

#[test]
fn table_spans_a0_to_c8() {
    let table = table();
    assert_eq!(table.len(), 88);
    assert_eq!(table[0].to_string(), "A0");
    assert_eq!(table[87].to_string(), "C8");
}

#[test]
fn octave_slot_counts() {
    let per_octave = |octave: u8| table().iter().filter(|s| s.octave() == octave).count();
    assert_eq!(per_octave(0), 3);
    for octave in 1..=7 {
        assert_eq!(per_octave(octave), 12, "octave {}", octave);
    }
    assert_eq!(per_octave(8), 1);
}

#[test]
fn table_is_strictly_ascending() {
    for window in table().windows(2) {
        assert!(window[0].frequency() < window[1].frequency());
    }
}

#[test]
fn table_construction_is_idempotent() {
    assert_eq!(build_table(), build_table());
    assert_eq!(table(), build_table().as_slice());
}

// =============================================================================
// Frequencies
// =============================================================================

#[test]
fn reference_pitch_is_440() {
    assert_eq!(freq("A4"), 440.00);
}

#[test]
fn octave_up_doubles_frequency() {
    assert_eq!(freq("A5"), 880.00);
    assert_eq!(freq("A3"), 220.00);
}

#[test]
fn known_frequencies() {
    assert_eq!(freq("C4"), 261.63); // middle C
    assert_eq!(freq("A0"), 27.50);
    assert_eq!(freq("C8"), 4186.01);
}

#[test]
fn enharmonic_spellings_share_frequency() {
    assert_eq!(freq("C#4"), freq("Db4"));
    assert_eq!(freq("G#2"), freq("Ab2"));
    assert_eq!(freq("A#0"), freq("Bb0"));
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(parse("c#4"), parse("C#4"));
    assert_eq!(parse("bb5"), parse("Bb5"));
    assert_eq!(parse("g3"), parse("G3"));
}

#[test]
fn parse_rejects_bad_specs() {
    assert!(parse("H4").is_err());
    assert!(parse("C9").is_err());
    assert!(parse("C##4").is_err());
    assert!(parse("E#4").is_err());
    assert!(parse("B#4").is_err());
    assert!(parse("Cb4").is_err());
}

#[test]
fn every_table_spelling_parses_back() {
    for slot in table() {
        match slot {
            Slot::Natural(note) => {
                let query = parse(&note.to_string()).unwrap();
                assert_eq!(find(&query).unwrap(), *note);
            }
            Slot::Pair { sharp, flat } => {
                for note in [sharp, flat] {
                    let query = parse(&note.to_string()).unwrap();
                    assert_eq!(find(&query).unwrap(), *note);
                }
            }
        }
    }
}

// =============================================================================
// Lookup & comparison
// =============================================================================

#[test]
fn lookup_respects_truncation() {
    assert!(find(&parse("G0").unwrap()).is_err());
    assert!(find(&parse("C0").unwrap()).is_err());
    assert!(find(&parse("G#0").unwrap()).is_err());
    assert!(find(&parse("D8").unwrap()).is_err());
    assert!(find(&parse("A0").unwrap()).is_ok());
    assert!(find(&parse("Bb0").unwrap()).is_ok());
    assert!(find(&parse("C8").unwrap()).is_ok());
}

#[test]
fn compare_orders_by_pitch() {
    let c4 = parse("C4").unwrap();
    let a4 = parse("A4").unwrap();
    assert_eq!(compare(&c4, &a4), Ok(Ordering::Less));
    assert_eq!(compare(&a4, &a4), Ok(Ordering::Equal));
    assert_eq!(compare(&a4, &c4), Ok(Ordering::Greater));
    assert!(compare(&a4, &parse("G0").unwrap()).is_err());
}

// =============================================================================
// Classifier & serde
// =============================================================================

#[test]
fn classifier_is_total_over_the_grid() {
    // Every combination classifies to exactly one variant; the valid ones
    // are exactly those the table contains.
    for name in ALL_NAMES {
        for accidental in ALL_ACCIDENTALS {
            for octave in 0..=9u8 {
                let class = classify(name, accidental, octave);
                let in_table = find(&Query::new(name, accidental, octave)).is_ok();
                assert_eq!(
                    class != NoteClass::Invalid,
                    in_table,
                    "{}{}{}",
                    name,
                    accidental,
                    octave
                );
            }
        }
    }
}

#[test]
fn slots_round_trip_through_serde() {
    for slot in table() {
        let json = serde_json::to_string(slot).unwrap();
        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(*slot, back);
    }
}

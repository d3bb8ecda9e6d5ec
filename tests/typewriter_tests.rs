// Host-side tests for the typewriter cycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod typewriter {
    include!("../src/core/typewriter.rs");
}

use constants::*;
use typewriter::*;

fn run(tw: &mut Typewriter, ticks: usize) -> Vec<(String, i32)> {
    (0..ticks)
        .map(|_| {
            let s = tw.tick();
            (s.text, s.delay_ms)
        })
        .collect()
}

#[test]
fn two_phrase_cycle_types_holds_and_deletes() {
    let mut tw = Typewriter::new(["A", "BB"]).unwrap();
    let seq = run(&mut tw, 9);
    let expected = vec![
        ("A".to_string(), HOLD_FULL_MS),
        ("".to_string(), HOLD_EMPTY_MS),
        ("B".to_string(), TYPE_DELAY_MS),
        ("BB".to_string(), HOLD_FULL_MS),
        ("B".to_string(), DELETE_DELAY_MS),
        ("".to_string(), HOLD_EMPTY_MS),
        ("A".to_string(), HOLD_FULL_MS),
        ("".to_string(), HOLD_EMPTY_MS),
        ("B".to_string(), TYPE_DELAY_MS),
    ];
    assert_eq!(seq, expected);
}

#[test]
fn phases_follow_type_hold_delete_hold() {
    let mut tw = Typewriter::new(["abc"]).unwrap();
    assert_eq!(tw.phase(), Phase::Typing);
    let phases: Vec<Phase> = (0..7)
        .map(|_| {
            tw.tick();
            tw.phase()
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            Phase::Typing,
            Phase::Typing,
            Phase::PausedAtFull,
            Phase::Deleting,
            Phase::Deleting,
            Phase::PausedAtEmpty,
            Phase::Typing,
        ]
    );
}

#[test]
fn single_phrase_wraps_back_to_itself() {
    let mut tw = Typewriter::new(["Hi"]).unwrap();
    for _ in 0..4 {
        tw.tick();
    }
    assert_eq!(tw.text_index(), 0);
    assert_eq!(tw.tick().text, "H");
}

#[test]
fn parse_splits_on_pipe_and_skips_empty_phrases() {
    let mut tw = Typewriter::parse("Dev||Ops|").unwrap();
    let texts: Vec<String> = run(&mut tw, 16)
        .into_iter()
        .filter(|(_, d)| *d == HOLD_FULL_MS)
        .map(|(t, _)| t)
        .collect();
    assert_eq!(texts, vec!["Dev", "Ops", "Dev"]);
}

#[test]
fn nothing_to_type_yields_none() {
    assert!(Typewriter::parse("").is_none());
    assert!(Typewriter::parse("||").is_none());
    assert!(Typewriter::new(Vec::<String>::new()).is_none());
}

#[test]
fn multibyte_phrases_advance_by_char() {
    let mut tw = Typewriter::new(["héllo✓"]).unwrap();
    let seq = run(&mut tw, 6);
    assert_eq!(seq[1].0, "hé");
    assert_eq!(seq[5].0, "héllo✓");
    assert_eq!(seq[5].1, HOLD_FULL_MS);
}

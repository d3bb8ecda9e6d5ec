// Host-side tests for section highlighting and anchor helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use nav::*;
use scroll::*;

fn page() -> Vec<SectionTop<'static>> {
    vec![
        SectionTop { id: Some("home"), top: 0.0 },
        SectionTop { id: Some("about"), top: 500.0 },
        SectionTop { id: Some("projects"), top: 1200.0 },
    ]
}

#[test]
fn picks_section_once_within_trigger_margin() {
    let sections = page();
    assert_eq!(current_section(&sections, 0.0), Some("home"));
    assert_eq!(current_section(&sections, 299.0), Some("home"));
    assert_eq!(current_section(&sections, 300.0), Some("about"));
    assert_eq!(current_section(&sections, 650.0), Some("about"));
    assert_eq!(current_section(&sections, 1000.0), Some("projects"));
}

#[test]
fn nothing_current_above_first_section() {
    let sections = vec![SectionTop { id: Some("intro"), top: 600.0 }];
    assert_eq!(current_section(&sections, 100.0), None);
    assert_eq!(current_section(&[], 100.0), None);
}

#[test]
fn last_matching_section_wins_past_its_bottom() {
    // no upper bound: a section stays current until a later one triggers
    let sections = page();
    assert_eq!(current_section(&sections, 50_000.0), Some("projects"));
}

#[test]
fn sections_without_id_leave_the_previous_one_current() {
    let sections = vec![
        SectionTop { id: Some("home"), top: 0.0 },
        SectionTop { id: None, top: 500.0 },
        SectionTop { id: Some(""), top: 900.0 },
        SectionTop { id: Some("contact"), top: 1500.0 },
    ];
    assert_eq!(current_section(&sections, 600.0), Some("home"));
    assert_eq!(current_section(&sections, 1200.0), Some("home"));
    assert_eq!(current_section(&sections, 1300.0), Some("contact"));
}

#[test]
fn only_unnamed_sections_give_no_current() {
    let sections = vec![SectionTop { id: None, top: 0.0 }];
    assert_eq!(current_section(&sections, 400.0), None);
}

#[test]
fn link_matches_exact_fragment_only() {
    assert!(link_targets_section("#about", "about"));
    assert!(link_targets_section("index.html#about", "about"));
    assert!(!link_targets_section("#about-me", "about"));
    assert!(!link_targets_section("#", "about"));
    assert!(!link_targets_section("about", "about"));
    assert!(!link_targets_section("", "home"));
}

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#contact"), Some("contact"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("/contact"), None);
}

#[test]
fn anchor_target_clears_fixed_header() {
    assert_eq!(anchor_scroll_top(1000.0), 920.0);
    assert_eq!(anchor_scroll_top(0.0), -80.0);
}

#[test]
fn back_to_top_threshold_is_strict() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(300.0));
    assert!(back_to_top_visible(300.5));
    assert!(back_to_top_visible(5000.0));
    // no hysteresis: dropping back below hides it again
    assert!(!back_to_top_visible(299.0));
}

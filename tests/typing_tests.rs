// Host-side tests for the typewriter cycle.

use portfolio_fx::constants::{DEFAULT_WORDS, TYPE_DELAY_MS, WORD_GAP_MS, WORD_HOLD_MS};
use portfolio_fx::core::{Direction, Step, Typewriter};

fn step(text: &str, delay_ms: u32) -> Step {
    Step {
        text: text.to_string(),
        delay_ms,
    }
}

#[test]
fn types_holds_deletes_then_advances() {
    let mut tw = Typewriter::new(["AI", "Go"]).unwrap();
    assert_eq!(tw.tick(), step("A", TYPE_DELAY_MS));
    assert_eq!(tw.tick(), step("AI", WORD_HOLD_MS));
    assert_eq!(tw.direction(), Direction::Deleting);
    assert_eq!(tw.tick(), step("A", TYPE_DELAY_MS));
    assert_eq!(tw.tick(), step("", WORD_GAP_MS));
    assert_eq!(tw.direction(), Direction::Typing);
    assert_eq!(tw.word_index(), 1);
    assert_eq!(tw.tick(), step("G", TYPE_DELAY_MS));
}

#[test]
fn wraps_back_to_first_word() {
    let mut tw = Typewriter::new(["a", "b"]).unwrap();
    let texts: Vec<String> = (0..6).map(|_| tw.tick().text).collect();
    assert_eq!(texts, ["a", "", "b", "", "a", ""]);
    assert_eq!(tw.word_index(), 1);
}

#[test]
fn single_char_word_holds_then_gaps() {
    let mut tw = Typewriter::new(["x"]).unwrap();
    assert_eq!(tw.tick(), step("x", WORD_HOLD_MS));
    assert_eq!(tw.tick(), step("", WORD_GAP_MS));
    assert_eq!(tw.word_index(), 0);
}

#[test]
fn slices_by_character_not_byte() {
    let mut tw = Typewriter::new(["héllo✓"]).unwrap();
    let typed: Vec<String> = (0..6).map(|_| tw.tick().text).collect();
    assert_eq!(typed[1], "hé");
    assert_eq!(typed[5], "héllo✓");
}

#[test]
fn empty_words_are_dropped() {
    assert!(Typewriter::new(Vec::<String>::new()).is_none());
    assert!(Typewriter::new(["", ""]).is_none());

    let mut tw = Typewriter::new(["", "ok"]).unwrap();
    assert_eq!(tw.tick().text, "o");
}

#[test]
fn default_words_full_cycle_length() {
    let mut tw = Typewriter::new(DEFAULT_WORDS).unwrap();
    // Each word takes len ticks to type and len ticks to delete.
    let ticks: usize = DEFAULT_WORDS.iter().map(|w| 2 * w.chars().count()).sum();
    let mut holds = 0;
    let mut gaps = 0;
    for _ in 0..ticks {
        match tw.tick().delay_ms {
            WORD_HOLD_MS => holds += 1,
            WORD_GAP_MS => gaps += 1,
            _ => {}
        }
    }
    assert_eq!(holds, DEFAULT_WORDS.len());
    assert_eq!(gaps, DEFAULT_WORDS.len());
    assert_eq!(tw.word_index(), 0);
    assert_eq!(tw.tick().text, "C");
}

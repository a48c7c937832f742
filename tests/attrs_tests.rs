// Host-side tests for data-attribute parsing.

use portfolio_fx::core::{parse_css_width, parse_particle_count, parse_word_list, AttrError};

#[test]
fn accepts_common_widths() {
    assert_eq!(parse_css_width("85%").unwrap(), "85%");
    assert_eq!(parse_css_width(" 120px ").unwrap(), "120px");
    assert_eq!(parse_css_width("2.5rem").unwrap(), "2.5rem");
    assert_eq!(parse_css_width("3em").unwrap(), "3em");
    assert_eq!(parse_css_width("40vw").unwrap(), "40vw");
    assert_eq!(parse_css_width("0").unwrap(), "0");
}

#[test]
fn rejects_bad_widths() {
    assert_eq!(parse_css_width(""), Err(AttrError::Empty));
    assert_eq!(parse_css_width("   "), Err(AttrError::Empty));
    for bad in ["abc", "-5%", "+5%", "50", "%", "12qq", "10 px", "calc(100% - 4px", "NaN%", "inf%"] {
        assert_eq!(
            parse_css_width(bad),
            Err(AttrError::InvalidLength(bad.to_string())),
            "{bad}"
        );
    }
}

#[test]
fn accepts_viewport_font_and_absolute_units() {
    for ok in [
        "50vh", "20vmin", "15vmax", "10ch", "4ex", "12pt", "3pc", "2cm", "25mm", "1in",
    ] {
        assert_eq!(parse_css_width(ok).as_deref(), Ok(ok), "{ok}");
    }
}

#[test]
fn passes_computed_widths_through() {
    for ok in [
        "calc(100% - 4px)",
        "min(80%, 400px)",
        "max(10rem, 30%)",
        "clamp(40%, 50vw, 90%)",
        "var(--skill-width)",
    ] {
        assert_eq!(parse_css_width(ok).as_deref(), Ok(ok), "{ok}");
    }
}

#[test]
fn word_list_splits_and_trims() {
    assert_eq!(
        parse_word_list(" Rust | WebAssembly ||  "),
        vec!["Rust".to_string(), "WebAssembly".to_string()]
    );
    assert!(parse_word_list("|  |").is_empty());
}

#[test]
fn particle_count_bounds() {
    assert_eq!(parse_particle_count("80"), Ok(80));
    assert_eq!(parse_particle_count(" 2000 "), Ok(2000));
    assert_eq!(parse_particle_count(""), Err(AttrError::Empty));
    assert_eq!(
        parse_particle_count("0"),
        Err(AttrError::InvalidCount("0".to_string()))
    );
    assert_eq!(
        parse_particle_count("2001"),
        Err(AttrError::InvalidCount("2001".to_string()))
    );
    assert_eq!(
        parse_particle_count("lots"),
        Err(AttrError::InvalidCount("lots".to_string()))
    );
}

#[test]
fn errors_render_offending_value() {
    let e = parse_particle_count("9999").unwrap_err();
    assert_eq!(
        e.to_string(),
        "invalid particle count \"9999\" (expected 1..=2000)"
    );
}

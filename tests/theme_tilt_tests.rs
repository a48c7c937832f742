// Host-side tests for theme presets and avatar tilt.

use portfolio_fx::core::{Rect, Theme, Tilt, BG_PROPERTY, MUTED_PROPERTY};

#[test]
fn unset_or_dark_bg_is_dark() {
    assert_eq!(Theme::from_bg(""), Theme::Dark);
    assert_eq!(Theme::from_bg("#05060a"), Theme::Dark);
    assert_eq!(Theme::from_bg("rebeccapurple"), Theme::Dark);
}

#[test]
fn both_white_spellings_are_light() {
    assert_eq!(Theme::from_bg("#fff"), Theme::Light);
    assert_eq!(Theme::from_bg("#ffffff"), Theme::Light);
    assert_eq!(Theme::from_bg(" #FFFFFF "), Theme::Light);
}

#[test]
fn toggle_round_trips_through_written_value() {
    // Starting dark, a click writes the light preset; reading that back must
    // classify as light so the next click returns to dark.
    let light = Theme::from_bg("").toggled();
    assert_eq!(light, Theme::Light);
    let written_bg = light.properties()[0].1;
    assert_eq!(Theme::from_bg(written_bg).toggled(), Theme::Dark);
}

#[test]
fn presets_write_both_properties() {
    assert_eq!(
        Theme::Dark.properties(),
        [(BG_PROPERTY, "#05060a"), (MUTED_PROPERTY, "#9aa4b2")]
    );
    assert_eq!(
        Theme::Light.properties(),
        [(BG_PROPERTY, "#ffffff"), (MUTED_PROPERTY, "#556")]
    );
}

const RECT: Rect = Rect {
    left: 100.0,
    top: 50.0,
    width: 200.0,
    height: 100.0,
};

#[test]
fn pointer_at_center_is_neutral() {
    let t = Tilt::from_pointer(200.0, 100.0, RECT);
    assert_eq!(t, Tilt::NEUTRAL);
    assert_eq!(
        t.css_transform(),
        "perspective(500px) rotateY(0deg) rotateX(0deg)"
    );
}

#[test]
fn corners_reach_half_range() {
    let top_left = Tilt::from_pointer(100.0, 50.0, RECT);
    assert_eq!(top_left.rotate_y, -7.5);
    assert_eq!(top_left.rotate_x, 7.5);

    let bottom_right = Tilt::from_pointer(300.0, 150.0, RECT);
    assert_eq!(bottom_right.rotate_y, 7.5);
    assert_eq!(bottom_right.rotate_x, -7.5);
    assert_eq!(
        bottom_right.css_transform(),
        "perspective(500px) rotateY(7.5deg) rotateX(-7.5deg)"
    );
}

#[test]
fn zero_sized_rect_is_neutral() {
    let rect = Rect {
        width: 0.0,
        ..RECT
    };
    assert_eq!(Tilt::from_pointer(10.0, 10.0, rect), Tilt::NEUTRAL);
}

#[test]
fn neutral_transform_has_no_negative_zero() {
    let t = Tilt {
        rotate_x: -0.0,
        rotate_y: -0.0,
    };
    assert_eq!(
        t.css_transform(),
        "perspective(500px) rotateY(0deg) rotateX(0deg)"
    );
}

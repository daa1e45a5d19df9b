// Host-side tests for style tables and small text helpers.

use folio_core::constants::REVEAL_CLASS;
use folio_core::{
    reveal_stylesheet, skill_width, stamp_year, CardElevation, MenuState, NavbarStyle,
};

fn prop(set: &[(&str, &str)], name: &str) -> Option<String> {
    set.iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.to_string())
}

#[test]
fn navbar_compacts_strictly_above_threshold() {
    assert_eq!(NavbarStyle::for_scroll(0.0), NavbarStyle::Default);
    assert_eq!(NavbarStyle::for_scroll(100.0), NavbarStyle::Default);
    assert_eq!(NavbarStyle::for_scroll(100.5), NavbarStyle::Compact);
    assert_eq!(NavbarStyle::for_scroll(2000.0), NavbarStyle::Compact);
}

#[test]
fn navbar_scrolling_back_restores_default() {
    let down = NavbarStyle::for_scroll(250.0).properties();
    assert_eq!(prop(down, "padding").as_deref(), Some("15px 0"));
    assert_eq!(
        prop(down, "box-shadow").as_deref(),
        Some("0 5px 20px rgba(0, 0, 0, 0.1)")
    );

    let up = NavbarStyle::for_scroll(40.0).properties();
    assert_eq!(prop(up, "padding").as_deref(), Some("20px 0"));
    assert_eq!(prop(up, "box-shadow").as_deref(), Some("none"));
}

#[test]
fn card_elevation_swaps_transform_and_shadow() {
    let raised = CardElevation::Raised.properties();
    let resting = CardElevation::Resting.properties();
    assert_eq!(prop(raised, "transform").as_deref(), Some("translateY(-10px)"));
    assert_eq!(prop(resting, "transform").as_deref(), Some("translateY(0)"));
    assert_eq!(
        prop(raised, "box-shadow").as_deref(),
        Some("0 20px 25px -5px rgba(0, 0, 0, 0.3)")
    );
    assert_eq!(
        prop(resting, "box-shadow").as_deref(),
        Some("0 10px 15px -3px rgba(0, 0, 0, 0.3)")
    );
}

#[test]
fn skill_width_parses_and_clamps() {
    assert_eq!(skill_width("85").as_deref(), Some("85%"));
    assert_eq!(skill_width(" 62.5 ").as_deref(), Some("62.5%"));
    assert_eq!(skill_width("140").as_deref(), Some("100%"));
    assert_eq!(skill_width("-3").as_deref(), Some("0%"));
}

#[test]
fn skill_width_rejects_non_numbers() {
    assert_eq!(skill_width(""), None);
    assert_eq!(skill_width("ninety"), None);
    assert_eq!(skill_width("NaN"), None);
    assert_eq!(skill_width("inf"), None);
}

#[test]
fn stamp_year_replaces_first_placeholder_only() {
    assert_eq!(
        stamp_year("© 2023 Jane Doe", "2023", 2026),
        "© 2026 Jane Doe"
    );
    assert_eq!(stamp_year("2023-2023", "2023", 2030), "2030-2023");
    assert_eq!(stamp_year("All rights reserved", "2023", 2030), "All rights reserved");
}

#[test]
fn reveal_stylesheet_staggers_each_group() {
    let css = reveal_stylesheet(REVEAL_CLASS);
    assert!(css.contains(".animated {"));
    assert!(css.contains("animation: fadeInUp 0.8s ease forwards;"));
    assert!(css.contains("@keyframes fadeInUp"));
    assert!(css.contains(".timeline-item:nth-child(3).animated { animation-delay: 0.5s; }"));
    assert!(css.contains(".project-card:nth-child(2).animated { animation-delay: 0.3s; }"));
    assert!(css.contains(".testimonial-card:nth-child(1).animated { animation-delay: 0.1s; }"));
    assert!(css.contains(".stat-card:nth-child(4).animated { animation-delay: 0.4s; }"));
    assert!(!css.contains(".stat-card:nth-child(5)"));
}

#[test]
fn menu_toggle_opens_and_closes() {
    let menu = MenuState::default();
    assert!(!menu.open);
    let opened = menu.toggled();
    assert!(opened.open);
    assert!(!opened.toggled().open);
}

#[test]
fn following_a_nav_link_closes_the_menu() {
    let opened = MenuState::default().toggled();
    assert_eq!(opened.closed(), MenuState::default());
    // Closing an already closed menu leaves it closed.
    assert!(!MenuState::default().closed().open);
}

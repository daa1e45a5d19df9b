//! Inline style states toggled by the navbar and project cards, plus the
//! reveal stylesheet appended to `<head>` at startup.

use crate::constants::NAVBAR_COMPACT_SCROLL_Y;

/// A set of `(property, value)` pairs applied with `style.setProperty`.
pub type StyleSet = &'static [(&'static str, &'static str)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Default,
    Compact,
}

impl NavbarStyle {
    #[inline]
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_COMPACT_SCROLL_Y {
            NavbarStyle::Compact
        } else {
            NavbarStyle::Default
        }
    }

    pub fn properties(self) -> StyleSet {
        match self {
            NavbarStyle::Default => &[("padding", "20px 0"), ("box-shadow", "none")],
            NavbarStyle::Compact => &[
                ("padding", "15px 0"),
                ("box-shadow", "0 5px 20px rgba(0, 0, 0, 0.1)"),
            ],
        }
    }
}

/// Open/closed state of the mobile menu. The toggle and the link list always
/// carry the `active` class together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Menu toggle clicked.
    #[inline]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// A nav link was followed.
    #[inline]
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// Elevation of a project card under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardElevation {
    Resting,
    Raised,
}

impl CardElevation {
    pub fn properties(self) -> StyleSet {
        match self {
            CardElevation::Raised => &[
                ("transform", "translateY(-10px)"),
                ("box-shadow", "0 20px 25px -5px rgba(0, 0, 0, 0.3)"),
            ],
            CardElevation::Resting => &[
                ("transform", "translateY(0)"),
                ("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.3)"),
            ],
        }
    }
}

// Card groups that get staggered entrance delays, with per-child delays in seconds.
const STAGGERED_GROUPS: &[(&str, &[f32])] = &[
    ("timeline-item", &[0.1, 0.3, 0.5]),
    ("project-card", &[0.1, 0.3, 0.5]),
    ("testimonial-card", &[0.1, 0.3, 0.5]),
    ("stat-card", &[0.1, 0.2, 0.3, 0.4]),
];

/// Stylesheet for the `.animated` fade-in-up entrance.
pub fn reveal_stylesheet(reveal_class: &str) -> String {
    let mut css = format!(
        ".{reveal_class} {{\n    animation: fadeInUp 0.8s ease forwards;\n}}\n\
         @keyframes fadeInUp {{\n    \
         from {{ opacity: 0; transform: translateY(30px); }}\n    \
         to {{ opacity: 1; transform: translateY(0); }}\n}}\n"
    );
    for (group, delays) in STAGGERED_GROUPS {
        for (i, delay) in delays.iter().enumerate() {
            css.push_str(&format!(
                ".{group}:nth-child({n}).{reveal_class} {{ animation-delay: {delay}s; }}\n",
                n = i + 1
            ));
        }
    }
    css
}

/// Width for a skill bar from its `data-width` attribute, clamped to 0..=100.
pub fn skill_width(attr: &str) -> Option<String> {
    let value: f64 = attr.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

/// Replace the first placeholder year in the footer text.
pub fn stamp_year(text: &str, placeholder: &str, year: u32) -> String {
    text.replacen(placeholder, &year.to_string(), 1)
}

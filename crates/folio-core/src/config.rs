//! DOM hooks the page is expected to provide.
//!
//! The web entry point resolves every element through a [`Selectors`] value,
//! so the initializers themselves only ever receive element references.

/// Ids, classes and selector lists for every enhanced element.
#[derive(Clone, Debug)]
pub struct Selectors {
    pub navbar: &'static str,
    pub menu_toggle: &'static str,
    pub nav_links: &'static str,
    pub nav_link_anchors: &'static str,
    /// Element id, not a selector.
    pub particles_container: &'static str,
    pub skill_bars: &'static str,
    pub skill_width_attr: &'static str,
    pub contact: ContactSelectors,
    pub reveal_targets: &'static str,
    pub project_cards: &'static str,
    pub hero_title: &'static str,
    pub footer_copyright: &'static str,
}

/// Element ids used by the contact form.
#[derive(Clone, Debug)]
pub struct ContactSelectors {
    pub form: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
    pub name_error: &'static str,
    pub email_error: &'static str,
    pub subject_error: &'static str,
    pub message_error: &'static str,
    pub status: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar",
            menu_toggle: ".menu-toggle",
            nav_links: ".nav-links",
            nav_link_anchors: ".nav-links a",
            particles_container: "particles",
            skill_bars: ".skill-progress",
            skill_width_attr: "data-width",
            contact: ContactSelectors::default(),
            reveal_targets: ".about-stats, .project-card, .testimonial-card, .timeline-item",
            project_cards: ".project-card",
            hero_title: ".hero-title",
            footer_copyright: ".footer-copyright",
        }
    }
}

impl Default for ContactSelectors {
    fn default() -> Self {
        Self {
            form: "messageForm",
            name: "name",
            email: "email",
            subject: "subject",
            message: "message",
            name_error: "nameError",
            email_error: "emailError",
            subject_error: "subjectError",
            message_error: "messageError",
            status: "formStatus",
        }
    }
}

/// Whether initialization has to wait for `DOMContentLoaded`, given
/// `document.readyState`. Once the document is parsed it runs immediately.
#[inline]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

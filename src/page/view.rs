//! Render-ready view data derived from `PageState`
//!
//! Shared by the server template and the browser controller so that the
//! first paint and later updates use the same classes.

use serde::Serialize;

use crate::page::sections::{Section, SectionRegistry};
use crate::page::state::PageState;

pub const ACTIVE_NAV_CLASS: &str = "text-white font-bold";
pub const IDLE_NAV_CLASS: &str = "text-gray-200";

const MENU_OPEN_ICON: &str = "M6 18L18 6M6 6l12 12";
const MENU_CLOSED_ICON: &str = "M4 6h16M4 12h16m-7 6h7";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: String,
    pub name: String,
    pub href: String,
    pub external: bool,
    pub active: bool,
}

impl NavItem {
    fn from_section(section: &Section, state: &PageState) -> Self {
        let (href, external) = match &section.external_href {
            Some(url) => (url.clone(), true),
            None => (format!("#{}", section.id), false),
        };
        Self {
            id: section.id.clone(),
            name: section.name.clone(),
            href,
            external,
            active: state.is_active(&section.id),
        }
    }

    pub fn class(&self) -> &'static str {
        nav_class(self.active)
    }
}

pub fn nav_class(active: bool) -> &'static str {
    if active {
        ACTIVE_NAV_CLASS
    } else {
        IDLE_NAV_CLASS
    }
}

/// Desktop bar: in-page anchors only
pub fn desktop_nav(registry: &SectionRegistry, state: &PageState) -> Vec<NavItem> {
    registry
        .iter()
        .filter(|section| !section.is_external())
        .map(|section| NavItem::from_section(section, state))
        .collect()
}

/// Mobile panel: every section, outbound entries as links
pub fn mobile_nav(registry: &SectionRegistry, state: &PageState) -> Vec<NavItem> {
    registry
        .iter()
        .map(|section| NavItem::from_section(section, state))
        .collect()
}

/// Class tokens to strip from and add to a desktop nav item on restyle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPatch {
    pub remove: Vec<&'static str>,
    pub add: Vec<&'static str>,
}

pub fn nav_class_patch(active: bool) -> ClassPatch {
    let add: Vec<&'static str> = nav_class(active).split_whitespace().collect();
    let remove = nav_class(!active)
        .split_whitespace()
        .filter(|token| !add.contains(token))
        .collect();
    ClassPatch { remove, add }
}

/// SVG path for the hamburger button (cross while open)
pub fn menu_icon_path(menu_open: bool) -> &'static str {
    if menu_open {
        MENU_OPEN_ICON
    } else {
        MENU_CLOSED_ICON
    }
}

/// Attributes of the hamburger button and mobile panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub panel_hidden: bool,
    pub aria_expanded: &'static str,
    pub icon_path: &'static str,
}

pub fn menu_view(menu_open: bool) -> MenuView {
    MenuView {
        panel_hidden: !menu_open,
        aria_expanded: if menu_open { "true" } else { "false" },
        icon_path: menu_icon_path(menu_open),
    }
}

/// Read back the menu state a rendered page was sent with
pub fn menu_open_from_aria(aria_expanded: Option<&str>) -> bool {
    aria_expanded == Some(menu_view(true).aria_expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::standard("https://example.org/form")
    }

    #[test]
    fn test_desktop_nav_highlights_active() {
        let state = PageState { active_section: "rules".to_string(), menu_open: false };
        let items = desktop_nav(&registry(), &state);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "rules", "gallery"]);

        let classes: Vec<&str> = items.iter().map(|i| i.class()).collect();
        assert_eq!(classes, vec![IDLE_NAV_CLASS, ACTIVE_NAV_CLASS, IDLE_NAV_CLASS]);
    }

    #[test]
    fn test_no_highlight_without_active_section() {
        let items = desktop_nav(&registry(), &PageState::default());
        assert!(items.iter().all(|i| !i.active));
    }

    #[test]
    fn test_mobile_nav_links_out_to_form() {
        let items = mobile_nav(&registry(), &PageState::default());
        assert_eq!(items.len(), 4);
        let evaluation = &items[3];
        assert!(evaluation.external);
        assert_eq!(evaluation.href, "https://example.org/form");
        assert_eq!(items[0].href, "#hero");
    }

    #[test]
    fn test_activating_item_swaps_idle_tokens_for_active() {
        let patch = nav_class_patch(true);
        assert_eq!(patch.add, vec!["text-white", "font-bold"]);
        assert_eq!(patch.remove, vec!["text-gray-200"]);
    }

    #[test]
    fn test_deactivating_item_swaps_back() {
        let patch = nav_class_patch(false);
        assert_eq!(patch.add, vec!["text-gray-200"]);
        assert_eq!(patch.remove, vec!["text-white", "font-bold"]);
    }

    #[test]
    fn test_menu_view_open_and_closed() {
        let open = menu_view(true);
        assert!(!open.panel_hidden);
        assert_eq!(open.aria_expanded, "true");
        assert_eq!(open.icon_path, MENU_OPEN_ICON);

        let closed = menu_view(false);
        assert!(closed.panel_hidden);
        assert_eq!(closed.aria_expanded, "false");
        assert_eq!(closed.icon_path, MENU_CLOSED_ICON);
    }

    #[test]
    fn test_menu_state_read_back_from_aria() {
        assert!(menu_open_from_aria(Some(menu_view(true).aria_expanded)));
        assert!(!menu_open_from_aria(Some(menu_view(false).aria_expanded)));
        assert!(!menu_open_from_aria(None));
        assert!(!menu_open_from_aria(Some("mixed")));
    }

    #[test]
    fn test_menu_icon_switches() {
        assert_eq!(menu_icon_path(true), MENU_OPEN_ICON);
        assert_eq!(menu_icon_path(false), MENU_CLOSED_ICON);
    }
}

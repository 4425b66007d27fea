//! Page state and the store that owns it
//!
//! `PageState` is only ever mutated through [`PageStore::dispatch`]. Hosts
//! report what happened (`PageAction`), the store updates state, notifies
//! listeners if anything changed, and hands back an [`Effect`] for the host
//! to carry out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::page::layout::SectionLayout;
use crate::page::navigator::{scroll_request_for, ScrollRequest, HEADER_OFFSET};
use crate::page::sections::SectionRegistry;
use crate::page::tracker::{resolve_active, ACTIVATION_LEAD};

/// Pixel constants for tracking and navigation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub activation_lead: f64,
    pub header_offset: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            activation_lead: ACTIVATION_LEAD,
            header_offset: HEADER_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Id of the highlighted section, empty when none qualifies
    pub active_section: String,
    pub menu_open: bool,
}

impl PageState {
    pub fn is_active(&self, section_id: &str) -> bool {
        !self.active_section.is_empty() && self.active_section == section_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Viewport scrolled to a new vertical offset
    Scrolled { offset: f64 },
    /// Nav item clicked
    NavigateTo { section_id: String },
    /// Hamburger button clicked
    ToggleMenu,
}

/// Work the host has to perform after a dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    ScrollTo(ScrollRequest),
}

type Listener = Box<dyn FnMut(&PageState)>;

pub struct PageStore {
    registry: SectionRegistry,
    config: PageConfig,
    state: PageState,
    listeners: Vec<Listener>,
}

impl PageStore {
    pub fn new(registry: SectionRegistry, config: PageConfig) -> Self {
        Self::with_state(registry, config, PageState::default())
    }

    /// Start from an already rendered state, e.g. a menu the server sent open
    pub fn with_state(registry: SectionRegistry, config: PageConfig, state: PageState) -> Self {
        Self {
            registry,
            config,
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Register a listener called with the new state after every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&PageState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch<L>(&mut self, action: PageAction, layout: &L) -> Option<Effect>
    where
        L: SectionLayout + ?Sized,
    {
        let previous = self.state.clone();

        let effect = match action {
            PageAction::Scrolled { offset } => {
                let active = resolve_active(&self.registry, layout, offset, self.config.activation_lead)
                    .map(|section| section.id.clone())
                    .unwrap_or_default();
                if active != self.state.active_section {
                    debug!(offset, from = %self.state.active_section, to = %active, "active section changed");
                }
                self.state.active_section = active;
                None
            }
            PageAction::NavigateTo { section_id } => {
                let request = if self.registry.contains(&section_id) {
                    scroll_request_for(layout, &section_id, self.config.header_offset)
                } else {
                    None
                };
                match request {
                    Some(request) => {
                        self.state.menu_open = false;
                        debug!(section = %section_id, top = request.top, "navigating");
                        Some(Effect::ScrollTo(request))
                    }
                    None => {
                        debug!(section = %section_id, "navigation target not measurable, ignoring");
                        None
                    }
                }
            }
            PageAction::ToggleMenu => {
                self.state.menu_open = !self.state.menu_open;
                None
            }
        };

        if self.state != previous {
            let state = &self.state;
            for listener in self.listeners.iter_mut() {
                listener(state);
            }
        }

        effect
    }
}

impl std::fmt::Debug for PageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStore")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::layout::StaticLayout;
    use crate::page::navigator::ScrollBehavior;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> PageStore {
        PageStore::new(
            SectionRegistry::standard("https://example.org/form"),
            PageConfig::default(),
        )
    }

    fn layout() -> StaticLayout {
        StaticLayout::new()
            .with("hero", 0.0, 500.0)
            .with("rules", 500.0, 800.0)
            .with("gallery", 1300.0, 900.0)
    }

    #[test]
    fn test_initial_state() {
        let store = store();
        assert_eq!(store.state().active_section, "");
        assert!(!store.state().menu_open);
    }

    #[test]
    fn test_toggle_twice_is_no_net_change() {
        let mut store = store();
        let layout = layout();
        store.dispatch(PageAction::ToggleMenu, &layout);
        assert!(store.state().menu_open);
        store.dispatch(PageAction::ToggleMenu, &layout);
        assert!(!store.state().menu_open);
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let mut store = store();
        let layout = layout();
        assert!(store.dispatch(PageAction::Scrolled { offset: 450.0 }, &layout).is_none());
        assert_eq!(store.state().active_section, "rules");
        store.dispatch(PageAction::Scrolled { offset: 50.0 }, &layout);
        assert_eq!(store.state().active_section, "hero");
        store.dispatch(PageAction::Scrolled { offset: 5000.0 }, &layout);
        assert_eq!(store.state().active_section, "");
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let mut store = store();
        let layout = layout();
        store.dispatch(PageAction::ToggleMenu, &layout);

        let effect = store.dispatch(
            PageAction::NavigateTo { section_id: "gallery".to_string() },
            &layout,
        );

        assert_eq!(
            effect,
            Some(Effect::ScrollTo(ScrollRequest { top: 1230.0, behavior: ScrollBehavior::Smooth }))
        );
        assert!(!store.state().menu_open);
    }

    #[test]
    fn test_navigate_with_closed_menu_keeps_it_closed() {
        let mut store = store();
        let layout = layout();
        store.dispatch(PageAction::NavigateTo { section_id: "rules".to_string() }, &layout);
        assert!(!store.state().menu_open);
    }

    #[test]
    fn test_navigate_to_unmounted_section_leaves_state_untouched() {
        let mut store = store();
        let empty = StaticLayout::new();
        store.dispatch(PageAction::ToggleMenu, &empty);
        let before = store.state().clone();

        let notified = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let effect = store.dispatch(
            PageAction::NavigateTo { section_id: "gallery".to_string() },
            &empty,
        );

        assert!(effect.is_none());
        assert_eq!(store.state(), &before);
        assert!(store.state().menu_open);
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn test_navigate_to_unknown_section_leaves_state_untouched() {
        let mut store = store();
        let layout = layout();
        store.dispatch(PageAction::ToggleMenu, &layout);

        let effect = store.dispatch(
            PageAction::NavigateTo { section_id: "sponsors".to_string() },
            &layout,
        );
        assert!(effect.is_none());
        assert!(store.state().menu_open);
    }

    #[test]
    fn test_with_state_seeds_open_menu() {
        let seeded = PageState { active_section: String::new(), menu_open: true };
        let mut store = PageStore::with_state(
            SectionRegistry::standard("https://example.org/form"),
            PageConfig::default(),
            seeded,
        );
        store.dispatch(PageAction::ToggleMenu, &StaticLayout::new());
        assert!(!store.state().menu_open);
    }

    #[test]
    fn test_listeners_fire_only_on_change() {
        let mut store = store();
        let layout = layout();
        let seen: Rc<RefCell<Vec<PageState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.dispatch(PageAction::Scrolled { offset: 50.0 }, &layout);
        store.dispatch(PageAction::Scrolled { offset: 60.0 }, &layout);
        store.dispatch(PageAction::Scrolled { offset: 450.0 }, &layout);
        store.dispatch(PageAction::NavigateTo { section_id: "hero".to_string() }, &layout);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].active_section, "hero");
        assert_eq!(seen[1].active_section, "rules");
    }

    #[test]
    fn test_is_active_ignores_empty() {
        let state = PageState::default();
        assert!(!state.is_active(""));
        assert!(!state.is_active("hero"));
    }
}

//! Page core: section registry, scroll tracking, navigation and menu state.
//!
//! Everything in here is host independent. The server renders the initial
//! page from a fresh [`PageStore`]; the browser controller feeds the same store
//! with scroll and click events and applies the returned effects.
//!
//! - `sections`: ordered registry of anchorable sections
//! - `layout`: measurement seam (`SectionLayout`) and a static implementation
//! - `tracker`: active-section resolution from a scroll offset
//! - `navigator`: smooth scroll requests that clear the fixed header
//! - `state`: `PageState`, `PageAction` and the dispatching `PageStore`
//! - `view`: nav items and icon paths derived from state

pub mod sections;
pub mod layout;
pub mod tracker;
pub mod navigator;
pub mod state;
pub mod view;

pub use sections::{Section, SectionRegistry};
pub use layout::{SectionLayout, SectionMetrics, StaticLayout};
pub use tracker::{resolve_active, ACTIVATION_LEAD};
pub use navigator::{scroll_request_for, ScrollBehavior, ScrollRequest, HEADER_OFFSET};
pub use state::{Effect, PageAction, PageConfig, PageState, PageStore};
pub use view::{
    desktop_nav, menu_icon_path, menu_open_from_aria, menu_view, mobile_nav, nav_class_patch,
    ClassPatch, MenuView, NavItem,
};

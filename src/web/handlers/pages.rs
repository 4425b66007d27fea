// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::content::{ContentStore, ImageBlock};
use crate::page::{
    desktop_nav, menu_view, mobile_nav, MenuView, NavItem, PageState, PageStore,
};

/// Module path the browser controller is loaded from
pub const CONTROLLER_MODULE: &str = "/pkg/marching_fest.js";
/// Prebuilt stylesheet path
pub const STYLESHEET: &str = "/assets/site.css";

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub content: &'a ContentStore,
    pub desktop_nav: Vec<NavItem>,
    pub mobile_nav: Vec<NavItem>,
    pub menu: MenuView,
    pub carousel: Vec<ImageBlock>,
    pub gallery: Vec<ImageBlock>,
    pub header_offset: f64,
    pub controller_module: &'a str,
    pub stylesheet: &'a str,
}

impl<'a> HomeTemplate<'a> {
    /// Snapshot of the store's current state for first paint
    pub fn from_store(content: &'a ContentStore, store: &PageStore) -> Self {
        let state = store.state();
        Self {
            content,
            desktop_nav: desktop_nav(store.registry(), state),
            mobile_nav: mobile_nav(store.registry(), state),
            menu: menu_view(state.menu_open),
            carousel: content.carousel_blocks(),
            gallery: content.gallery_blocks(),
            header_offset: store.config().header_offset,
            controller_module: CONTROLLER_MODULE,
            stylesheet: STYLESHEET,
        }
    }
}

/// `?menu=open` renders the mobile panel expanded for clients without script
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub menu: Option<String>,
}

pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let initial = PageState {
        menu_open: query.menu.as_deref() == Some("open"),
        ..PageState::default()
    };
    let store = PageStore::with_state(state.registry.as_ref().clone(), state.page_config, initial);

    let template = HomeTemplate::from_store(&state.content, &store);
    Ok(Html(template.render()?))
}

//! Marching Fest competition site
//!
//! Single-page site for a marching-band competition, rendered by an Axum
//! server and brought to life in the browser by a small wasm controller.
//!
//! - `page/`: section registry, scroll tracker, navigator, menu state store
//! - `content`: static copy, photos and rules
//! - `config`: server settings from the environment
//! - `web/`, `api_server`: Askama rendering and the HTTP router (feature `server`)
//! - `browser`: DOM event wiring (feature `wasm`)

pub mod page;
pub mod content;
pub mod config;

#[cfg(feature = "server")]
pub mod api_server;
#[cfg(feature = "server")]
pub mod web;

#[cfg(feature = "wasm")]
pub mod browser;

// Re-export commonly used types
pub use content::{ContentStore, ImageBlock};
pub use page::{PageAction, PageConfig, PageState, PageStore, SectionRegistry};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};

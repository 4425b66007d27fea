//! Navigator
//!
//! Turns a section id into a smooth scroll request whose target sits just
//! below the sticky header.

use serde::Serialize;

use crate::page::layout::SectionLayout;

/// Height of the sticky navigation bar
pub const HEADER_OFFSET: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Scroll request for `section_id`, or `None` when the section cannot be
/// measured.
pub fn scroll_request_for<L>(layout: &L, section_id: &str, header_offset: f64) -> Option<ScrollRequest>
where
    L: SectionLayout + ?Sized,
{
    let metrics = layout.measure(section_id)?;
    Some(ScrollRequest {
        top: metrics.offset_top - header_offset,
        behavior: ScrollBehavior::Smooth,
    })
}

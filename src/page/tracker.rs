//! Scroll Tracker
//!
//! Resolves which section is "in view" for a vertical scroll offset.
//!
//! A section is active when
//! `offset >= top - lead && offset < top - lead + height`, so the highlight
//! switches `lead` pixels before the section reaches the viewport top.
//! Sections are checked in registration order and the last match wins.
//! Unmeasurable sections are skipped for the pass.

use crate::page::layout::SectionLayout;
use crate::page::sections::{Section, SectionRegistry};

/// Distance subtracted from a section's top before the containment check
pub const ACTIVATION_LEAD: f64 = 100.0;

/// Find the active section for `scroll_offset`, or `None` when no section
/// contains it.
pub fn resolve_active<'a, L>(
    registry: &'a SectionRegistry,
    layout: &L,
    scroll_offset: f64,
    activation_lead: f64,
) -> Option<&'a Section>
where
    L: SectionLayout + ?Sized,
{
    let mut active = None;

    for section in registry.iter() {
        let Some(metrics) = layout.measure(&section.id) else {
            continue;
        };

        let section_top = metrics.offset_top - activation_lead;
        if scroll_offset >= section_top && scroll_offset < section_top + metrics.height {
            active = Some(section);
        }
    }

    active
}

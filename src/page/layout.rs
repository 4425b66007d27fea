//! Section measurement
//!
//! The page core never touches the host document directly. Anything that can
//! report a section's top offset and height implements [`SectionLayout`].
//! A section that is not mounted yet measures as `None`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Measured position of a section element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionMetrics {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    /// From DOM `offsetTop`/`offsetHeight`. A zero-height element is laid out
    /// but has nothing to scroll past, so it still measures.
    pub fn from_offsets(offset_top: i32, offset_height: i32) -> Self {
        Self::new(f64::from(offset_top), f64::from(offset_height))
    }
}

pub trait SectionLayout {
    fn measure(&self, section_id: &str) -> Option<SectionMetrics>;
}

/// Fixed measurements keyed by section id
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    metrics: HashMap<String, SectionMetrics>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section_id: &str, offset_top: f64, height: f64) -> Self {
        self.insert(section_id, SectionMetrics::new(offset_top, height));
        self
    }

    pub fn insert(&mut self, section_id: &str, metrics: SectionMetrics) {
        self.metrics.insert(section_id.to_string(), metrics);
    }
}

impl SectionLayout for StaticLayout {
    fn measure(&self, section_id: &str) -> Option<SectionMetrics> {
        self.metrics.get(section_id).copied()
    }
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn measure(&self, section_id: &str) -> Option<SectionMetrics> {
        (**self).measure(section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_layout_lookup() {
        let layout = StaticLayout::new().with("rules", 500.0, 800.0);
        assert_eq!(layout.measure("rules"), Some(SectionMetrics::new(500.0, 800.0)));
        assert_eq!(layout.measure("gallery"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut layout = StaticLayout::new().with("hero", 0.0, 500.0);
        layout.insert("hero", SectionMetrics::new(0.0, 640.0));
        assert_eq!(layout.measure("hero").map(|m| m.height), Some(640.0));
    }

    #[test]
    fn test_from_offsets() {
        assert_eq!(SectionMetrics::from_offsets(1300, 900), SectionMetrics::new(1300.0, 900.0));
        assert_eq!(SectionMetrics::from_offsets(-20, 0), SectionMetrics::new(-20.0, 0.0));
    }

    #[test]
    fn test_layout_by_reference() {
        fn measure_via<L: SectionLayout>(layout: L) -> Option<SectionMetrics> {
            layout.measure("hero")
        }
        let layout = StaticLayout::new().with("hero", 0.0, 500.0);
        assert!(measure_via(&layout).is_some());
    }
}

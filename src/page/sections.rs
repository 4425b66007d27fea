//! Section registry
//!
//! The page exposes four anchors in document order: hero, rules, gallery and
//! evaluation. The evaluation anchor is the floating form link; in the mobile
//! menu it renders as an outbound link instead of a scroll target.

use serde::Serialize;

/// A named, anchorable region of the page. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub id: String,
    /// Outbound URL for entries that leave the page (evaluation form)
    pub external_href: Option<String>,
}

impl Section {
    pub fn anchor(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            external_href: None,
        }
    }

    pub fn external(name: &str, id: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            external_href: Some(href.to_string()),
        }
    }

    pub fn is_external(&self) -> bool {
        self.external_href.is_some()
    }
}

/// Ordered, immutable list of sections. Registration order is evaluation order
/// for the scroll tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The competition page layout: Hero, Rules, Gallery, Evaluation Form.
    pub fn standard(evaluation_form_url: &str) -> Self {
        Self::new(vec![
            Section::anchor("Hero", "hero"),
            Section::anchor("Rules", "rules"),
            Section::anchor("Gallery", "gallery"),
            Section::external("Evaluation Form", "evaluation", evaluation_form_url),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

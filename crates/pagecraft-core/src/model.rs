use crate::JsonMap;
use derive_more::{Deref, Display};
use pagecraft_schema::key::TemplateKey;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;
use ulid::Ulid;

///
/// Slug
///
/// Human-readable page address: non-empty lowercase kebab segments.
/// Deserialization is tolerant (storage owns whatever it already holds);
/// `Slug::new` validates editor-supplied values.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        let valid = !s.is_empty()
            && !s.starts_with('-')
            && !s.ends_with('-')
            && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(Self(s))
        } else {
            Err(ModelError::InvalidSlug { slug: s })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

///
/// SectionId
///
/// Locally-unique section identifier, persisted as an opaque string. Fresh
/// ids are `sec-<ulid>`; ids loaded from storage are kept verbatim.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("sec-{}", Ulid::new().to_string().to_lowercase()))
    }

    #[must_use]
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// PageStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

///
/// Section
///
/// One configurable, positioned unit within a page. `order` is explicit on
/// the wire; legacy documents without it are backfilled from array position
/// by [`Page::normalize_order`].
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub template_key: TemplateKey,
    pub title: String,
    pub visible: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub data: JsonMap,
}

impl Section {
    /// Sidebar title override carried inside `data`, used only by
    /// navigation-style pages.
    #[must_use]
    pub fn sidebar_title(&self) -> Option<&str> {
        self.data.get("sidebarTitle").and_then(|v| v.as_str())
    }

    #[must_use]
    pub fn sidebar_icon(&self) -> Option<&str> {
        self.data.get("sidebarIcon").and_then(|v| v.as_str())
    }
}

///
/// AdmissionModalConfig
///
/// Page-level promotional modal configuration (home page only).
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionModalConfig {
    pub enabled: bool,
    #[serde(default)]
    pub posters: Vec<String>,
    #[serde(default)]
    pub link: String,
}

///
/// Page
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_modal_config: Option<AdmissionModalConfig>,
}

impl Page {
    #[must_use]
    pub fn new(slug: Slug, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug,
            status: PageStatus::Draft,
            sections: Vec::new(),
            admission_modal_config: None,
        }
    }

    /// Renumber `order` to match display order.
    ///
    /// Sections are stable-sorted by their stored `order`, then assigned
    /// `0..n`. Legacy documents where every `order` defaulted to zero keep
    /// their array position; already-normalized pages are unchanged.
    pub fn normalize_order(&mut self) {
        self.sections.sort_by_key(|s| s.order);
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as u32;
        }
    }
}

///
/// ModelError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("invalid slug: '{slug}'")]
    InvalidSlug { slug: String },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slug_accepts_kebab_and_rejects_the_rest() {
        assert!(Slug::new("home").is_ok());
        assert!(Slug::new("cs-department-2024").is_ok());
        assert!(Slug::new("").is_err());
        assert!(Slug::new("Home").is_err());
        assert!(Slug::new("-home").is_err());
        assert!(Slug::new("ho me").is_err());
    }

    #[test]
    fn section_wire_shape_is_stable() {
        let section = Section {
            id: SectionId::from_raw("a"),
            template_key: TemplateKey::HeroSection,
            title: "Hero Section".to_string(),
            visible: true,
            order: 0,
            data: json!({ "title": "Welcome" }).as_object().cloned().unwrap(),
        };

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "a",
                "templateKey": "hero_section",
                "title": "Hero Section",
                "visible": true,
                "order": 0,
                "data": { "title": "Welcome" }
            })
        );
    }

    #[test]
    fn legacy_sections_without_order_backfill_from_position() {
        let mut page: Page = serde_json::from_value(json!({
            "title": "Home",
            "slug": "home",
            "status": "published",
            "sections": [
                { "id": "a", "templateKey": "hero_section", "title": "A", "visible": true, "data": {} },
                { "id": "b", "templateKey": "design_two", "title": "B", "visible": true, "data": {} },
                { "id": "c", "templateKey": "design_three", "title": "C", "visible": false, "data": {} }
            ]
        }))
        .unwrap();

        page.normalize_order();
        let orders: Vec<u32> = page.sections.iter().map(|s| s.order).collect();
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let a = SectionId::generate();
        let b = SectionId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("sec-"));
    }

    #[test]
    fn admission_modal_config_round_trips_under_its_wire_key() {
        let page = Page {
            admission_modal_config: Some(AdmissionModalConfig {
                enabled: true,
                posters: vec!["/images/admissionPoster.jpg".to_string()],
                link: "https://example.edu/apply".to_string(),
            }),
            ..Page::new(Slug::new("home").unwrap(), "Home")
        };

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["admissionModalConfig"]["enabled"], true);

        let back: Page = serde_json::from_value(value).unwrap();
        assert_eq!(back.admission_modal_config.unwrap().posters.len(), 1);
    }
}

//! Template registry.
//!
//! Maps template keys to renderable units. A unit's whole capability is
//! "accept a property bag, produce a rendered unit" — the visual layout of
//! the concrete section templates is outside the engine's contract, so the
//! default registry renders every closed key generically and keeps the
//! original alias adapters that remap props onto their base designs.

use crate::JsonMap;
use pagecraft_schema::key::TemplateKey;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;

///
/// Rendered
///
/// Output of one template invocation. `Placeholder` marks a section whose
/// key did not resolve; page load must degrade, not crash.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Rendered {
    Unit {
        #[serde(rename = "templateKey")]
        key: TemplateKey,
        props: JsonMap,
    },
    Placeholder {
        #[serde(rename = "templateKey")]
        key: TemplateKey,
    },
}

impl Rendered {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    #[must_use]
    pub const fn key(&self) -> &TemplateKey {
        match self {
            Self::Unit { key, .. } | Self::Placeholder { key } => key,
        }
    }
}

///
/// Template
///

pub trait Template {
    fn render(&self, props: JsonMap) -> Rendered;
}

///
/// TemplateRegistry
///

pub struct TemplateRegistry {
    templates: BTreeMap<TemplateKey, Box<dyn Template>>,
}

impl TemplateRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registry with every closed key present: generic units for the
    /// design templates, prop-mapping adapters for the aliases.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        for key in TemplateKey::ALL {
            registry.register(key.clone(), Box::new(GenericTemplate { key: key.clone() }));
        }

        registry.register(TemplateKey::HeroSection, Box::new(HeroSection));
        registry.register(TemplateKey::AboutBrief, Box::new(AboutBrief));
        registry.register(TemplateKey::DepartmentHero, Box::new(DepartmentHero));
        registry.register(TemplateKey::HodMessage, Box::new(HodMessage));
        registry.register(TemplateKey::VisionMission, Box::new(VisionMission));
        registry.register(TemplateKey::StatsGrid, Box::new(StatsGrid));

        registry
    }

    pub fn register(&mut self, key: TemplateKey, template: Box<dyn Template>) {
        self.templates.insert(key, template);
    }

    /// `None` for stale or custom keys; callers substitute a placeholder.
    #[must_use]
    pub fn resolve(&self, key: &TemplateKey) -> Option<&dyn Template> {
        self.templates.get(key).map(Box::as_ref)
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("keys", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

///
/// GenericTemplate
///

struct GenericTemplate {
    key: TemplateKey,
}

impl Template for GenericTemplate {
    fn render(&self, props: JsonMap) -> Rendered {
        Rendered::Unit {
            key: self.key.clone(),
            props,
        }
    }
}

// ---- alias adapters ----
//
// Documentation-era template names render through the base designs with
// their props remapped, exactly as the original registry aliased them.

struct HeroSection;

impl Template for HeroSection {
    fn render(&self, props: JsonMap) -> Rendered {
        Rendered::Unit {
            key: TemplateKey::DesignOne,
            props,
        }
    }
}

struct AboutBrief;

impl Template for AboutBrief {
    fn render(&self, mut props: JsonMap) -> Rendered {
        if let Some(text) = props.get("text").cloned() {
            props.insert("description".to_string(), text);
        }
        props.insert("variant".to_string(), json!("simple"));

        Rendered::Unit {
            key: TemplateKey::DesignOne,
            props,
        }
    }
}

struct DepartmentHero;

impl Template for DepartmentHero {
    fn render(&self, mut props: JsonMap) -> Rendered {
        if let Some(subtitle) = props.get("subtitle").cloned() {
            props.insert("description".to_string(), subtitle);
        }
        props.insert("variant".to_string(), json!("hero"));

        if let Some(chips) = props.get("chips").and_then(Value::as_array) {
            let buttons: Vec<Value> = chips
                .iter()
                .map(|chip| {
                    json!({
                        "text": chip.get("label").cloned().unwrap_or(Value::Null),
                        "link": chip.get("link").cloned().unwrap_or(Value::Null),
                        "primary": true
                    })
                })
                .collect();
            props.insert("buttons".to_string(), Value::Array(buttons));
        }

        Rendered::Unit {
            key: TemplateKey::DesignOne,
            props,
        }
    }
}

struct HodMessage;

impl Template for HodMessage {
    fn render(&self, props: JsonMap) -> Rendered {
        let message = props.get("message").cloned().unwrap_or(Value::Null);
        let mapped = json!({
            "title": "From the HOD's Desk",
            "description": message,
            "items": [{
                "name": props.get("name").cloned().unwrap_or(Value::Null),
                "position": props.get("designation").cloned().unwrap_or(Value::Null),
                "image": props.get("image").cloned().unwrap_or(Value::Null),
                "description": message,
            }]
        });

        Rendered::Unit {
            key: TemplateKey::DesignFour,
            props: match mapped {
                Value::Object(map) => map,
                _ => JsonMap::new(),
            },
        }
    }
}

struct VisionMission;

impl Template for VisionMission {
    fn render(&self, props: JsonMap) -> Rendered {
        let mapped = json!({
            "title": "Vision & Mission",
            "description": props.get("vision").cloned().unwrap_or(Value::Null),
            "swotData": {
                "strengths": props.get("mission").cloned().unwrap_or_else(|| json!([])),
            }
        });

        Rendered::Unit {
            key: TemplateKey::DesignFive,
            props: match mapped {
                Value::Object(map) => map,
                _ => JsonMap::new(),
            },
        }
    }
}

struct StatsGrid;

impl Template for StatsGrid {
    fn render(&self, props: JsonMap) -> Rendered {
        Rendered::Unit {
            key: TemplateKey::DesignNine,
            props,
        }
    }
}

///
/// TESTS
///

//! Template picker presets: the curated starting points an editor chooses
//! from when adding a section, each with seed demo content.

use crate::key::TemplateKey;
use serde_json::{Map, Value, json};

///
/// Preset
///

#[derive(Clone, Debug)]
pub struct Preset {
    pub key: TemplateKey,
    pub variant: Option<&'static str>,
    pub name: &'static str,
    pub description: &'static str,
    pub demo_data: Map<String, Value>,
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// The picker's preset list, in display order.
#[must_use]
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            key: TemplateKey::DesignOne,
            variant: Some("hero"),
            name: "Hero Banner",
            description: "Full-width banner with background image, title, and buttons.",
            demo_data: object(json!({
                "title": "Institute of Engineering & Technology",
                "description": "A constituent institute of the university",
                "variant": "hero",
                "buttons": [{ "text": "Explore", "link": "#", "primary": true }]
            })),
        },
        Preset {
            key: TemplateKey::DesignOne,
            variant: Some("simple"),
            name: "Simple Title & Text",
            description: "Centered heading with description text.",
            demo_data: object(json!({
                "title": "About Us",
                "badge": "Info",
                "description": "Brief introduction to the section content.",
                "variant": "simple"
            })),
        },
        Preset {
            key: TemplateKey::DesignTwo,
            variant: None,
            name: "Features Grid (3 Cols)",
            description: "Grid of cards with icons and descriptions.",
            demo_data: object(json!({
                "items": [
                    { "title": "Feature 1", "description": "Description 1", "icon": "FaStar" },
                    { "title": "Feature 2", "description": "Description 2", "icon": "FaHeart" },
                    { "title": "Feature 3", "description": "Description 3", "icon": "FaBolt" }
                ]
            })),
        },
        Preset {
            key: TemplateKey::DesignFour,
            variant: None,
            name: "Faculty / Team Grid",
            description: "Cards with circular photos for team members.",
            demo_data: object(json!({
                "title": "Our Team",
                "items": [
                    { "name": "Dr. Smith", "position": "Professor", "image": "https://via.placeholder.com/150" },
                    { "name": "Prof. Doe", "position": "HOD", "image": "https://via.placeholder.com/150" }
                ]
            })),
        },
        Preset {
            key: TemplateKey::DesignEight,
            variant: None,
            name: "Carousel & Content",
            description: "Split view with image slider and detailed content.",
            demo_data: object(json!({
                "title": "Infrastructure",
                "content": "State of the art labs and classrooms.",
                "images": [{ "src": "https://via.placeholder.com/400" }]
            })),
        },
        Preset {
            key: TemplateKey::DesignNine,
            variant: None,
            name: "News / Publications",
            description: "List views for events, news, or publications.",
            demo_data: object(json!({
                "title": "Recent News",
                "items": [
                    { "title": "Event One", "description": "Details about event.", "date": "Jan 10" },
                    { "title": "Publication", "description": "Research paper published.", "date": "Feb 15" }
                ]
            })),
        },
    ]
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn presets_target_closed_keys() {
        for preset in presets() {
            assert!(!preset.key.is_custom(), "preset {} uses a custom key", preset.name);
        }
    }

    #[test]
    fn demo_data_keys_are_declared_by_the_schema() {
        for preset in presets() {
            let schema = Catalog::get(&preset.key);
            for key in preset.demo_data.keys() {
                assert!(
                    schema.iter().any(|f| f.name == key),
                    "preset {} seeds undeclared field {key}",
                    preset.name
                );
            }
        }
    }
}

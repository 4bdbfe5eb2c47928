//! Page renderer: section list in, ordered rendered units out.
//!
//! Rendering is independent of how the list was edited; the renderer only
//! sees persisted sections, an optional external context, and the registry.

use crate::{
    JsonMap,
    model::{Section, Slug},
    obs::{self, EngineEvent},
    registry::{Rendered, TemplateRegistry},
    store::{PageStore, StoreError},
};
use serde_json::Value;

///
/// RenderContext
///
/// Keys injected into every section's props at render time (for example a
/// department identifier on department pages). Context keys win over
/// section data on collision.
///

#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    extra: JsonMap,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn department(id: &str) -> Self {
        Self::new().with("departmentId", Value::String(id.to_string()))
    }
}

/// Render a section list: drop invisible sections, stable-sort the rest by
/// `order`, and invoke each section's template with its data plus the
/// context. Unresolvable keys become placeholders at their position.
#[must_use]
pub fn render_sections(
    sections: &[Section],
    ctx: &RenderContext,
    registry: &TemplateRegistry,
) -> Vec<Rendered> {
    let mut visible: Vec<&Section> = sections.iter().filter(|s| s.visible).collect();
    visible.sort_by_key(|s| s.order);

    visible
        .into_iter()
        .map(|section| {
            let mut props = section.data.clone();
            for (key, value) in &ctx.extra {
                props.insert(key.clone(), value.clone());
            }

            match registry.resolve(&section.template_key) {
                Some(template) => template.render(props),
                None => {
                    obs::record(&EngineEvent::PlaceholderRendered {
                        key: section.template_key.to_string(),
                    });
                    Rendered::Placeholder {
                        key: section.template_key.clone(),
                    }
                }
            }
        })
        .collect()
}

/// Fetch a page by slug and render it. A fetch failure (including
/// not-found) is a single page-level error; there is no section-by-section
/// fallback at this stage.
pub fn render_slug(
    store: &dyn PageStore,
    slug: &Slug,
    ctx: &RenderContext,
    registry: &TemplateRegistry,
) -> Result<Vec<Rendered>, StoreError> {
    let page = store.get_page_by_slug(slug)?;
    Ok(render_sections(&page.sections, ctx, registry))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Page, PageStatus, SectionId},
        store::MemoryPageStore,
    };
    use pagecraft_schema::key::TemplateKey;
    use proptest::prelude::*;
    use serde_json::json;

    fn section(id: &str, key: TemplateKey, order: u32, visible: bool, data: Value) -> Section {
        Section {
            id: SectionId::from_raw(id),
            template_key: key,
            title: id.to_string(),
            visible,
            order,
            data: data.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn home_page_renders_exactly_the_visible_section() {
        let sections = vec![
            section("a", TemplateKey::HeroSection, 0, true, json!({ "title": "Welcome" })),
            section("b", TemplateKey::DesignTwo, 1, false, json!({ "items": [] })),
        ];

        let units = render_sections(
            &sections,
            &RenderContext::new(),
            &TemplateRegistry::with_defaults(),
        );

        assert_eq!(units.len(), 1);
        match &units[0] {
            Rendered::Unit { key, props } => {
                // hero_section aliases onto design_one
                assert_eq!(key, &TemplateKey::DesignOne);
                assert_eq!(props["title"], json!("Welcome"));
            }
            Rendered::Placeholder { .. } => panic!("visible section must render"),
        }
    }

    #[test]
    fn unresolved_keys_render_placeholders_in_place() {
        let sections = vec![
            section("a", TemplateKey::DesignTwo, 0, true, json!({})),
            section(
                "b",
                TemplateKey::Custom("retired_design".to_string()),
                1,
                true,
                json!({}),
            ),
            section("c", TemplateKey::DesignThree, 2, true, json!({})),
        ];

        let units = render_sections(
            &sections,
            &RenderContext::new(),
            &TemplateRegistry::with_defaults(),
        );

        assert_eq!(units.len(), 3);
        assert!(!units[0].is_placeholder());
        assert!(units[1].is_placeholder());
        assert_eq!(units[1].key().as_str(), "retired_design");
        assert!(!units[2].is_placeholder());
    }

    #[test]
    fn context_keys_are_injected_into_every_unit() {
        let sections = vec![section(
            "a",
            TemplateKey::DesignFour,
            0,
            true,
            json!({ "title": "Faculty" }),
        )];

        let units = render_sections(
            &sections,
            &RenderContext::department("civil"),
            &TemplateRegistry::with_defaults(),
        );

        match &units[0] {
            Rendered::Unit { props, .. } => {
                assert_eq!(props["departmentId"], json!("civil"));
                assert_eq!(props["title"], json!("Faculty"));
            }
            Rendered::Placeholder { .. } => panic!("section must render"),
        }
    }

    #[test]
    fn render_slug_surfaces_not_found_as_a_page_level_error() {
        let store = MemoryPageStore::new();
        let result = render_slug(
            &store,
            &Slug::new("missing").unwrap(),
            &RenderContext::new(),
            &TemplateRegistry::with_defaults(),
        );
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn render_slug_renders_a_stored_page() {
        let store = MemoryPageStore::new();
        let mut page = Page::new(Slug::new("home").unwrap(), "Home");
        page.status = PageStatus::Published;
        page.sections = vec![section(
            "a",
            TemplateKey::AboutBrief,
            0,
            true,
            json!({ "text": "Hi" }),
        )];
        store.create_page(&page).unwrap();

        let units = render_slug(
            &store,
            &page.slug,
            &RenderContext::new(),
            &TemplateRegistry::with_defaults(),
        )
        .unwrap();
        assert_eq!(units.len(), 1);
    }

    proptest! {
        /// Output order equals visible sections stable-sorted by `order`;
        /// invisible sections never appear.
        #[test]
        fn output_matches_visible_sections_in_order(
            entries in proptest::collection::vec((any::<bool>(), 0u32..10), 0..12)
        ) {
            let sections: Vec<Section> = entries
                .iter()
                .enumerate()
                .map(|(i, (visible, order))| {
                    section(&format!("s{i}"), TemplateKey::DesignTwo, *order, *visible, json!({ "pos": i }))
                })
                .collect();

            let units = render_sections(
                &sections,
                &RenderContext::new(),
                &TemplateRegistry::with_defaults(),
            );

            let mut expected: Vec<&Section> = sections.iter().filter(|s| s.visible).collect();
            expected.sort_by_key(|s| s.order);

            prop_assert_eq!(units.len(), expected.len());
            for (unit, section) in units.iter().zip(expected) {
                match unit {
                    Rendered::Unit { props, .. } => {
                        prop_assert_eq!(&props["pos"], &section.data["pos"]);
                    }
                    Rendered::Placeholder { .. } => prop_assert!(false, "no placeholders expected"),
                }
            }
        }
    }
}

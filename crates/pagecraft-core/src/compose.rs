//! Per-page composition store.
//!
//! Holds one page's ordered section list for the duration of an editing
//! session and applies structural operations. The section vector is kept in
//! display order, so a structural index and a section's `order` agree at
//! all times. Persistence is a single explicit `save`; partial edits are
//! never half-persisted. Two concurrent editors overwrite each other — an
//! accepted limitation of the whole-page save model.

use crate::{
    JsonMap,
    form::FormSession,
    model::{Page, PageStatus, Section, SectionId, Slug},
    obs::{self, EngineEvent},
    store::{PageStore, StoreError},
};
use convert_case::{Case, Casing};
use pagecraft_schema::{catalog::Catalog, key::TemplateKey, preset::Preset};
use serde_json::Value;
use thiserror::Error as ThisError;

///
/// Composition
///

#[derive(Debug)]
pub struct Composition {
    page: Page,
}

impl Composition {
    /// Start an editing session for a brand-new page.
    #[must_use]
    pub fn new(slug: Slug, title: impl Into<String>) -> Self {
        Self {
            page: Page::new(slug, title),
        }
    }

    /// Start an editing session from a stored page. Legacy section order is
    /// normalized on the way in.
    pub fn load(store: &dyn PageStore, slug: &Slug) -> Result<Self, StoreError> {
        let mut page = store.get_page_by_slug(slug)?;
        page.normalize_order();

        obs::record(&EngineEvent::PageLoaded {
            slug: slug.to_string(),
        });

        Ok(Self { page })
    }

    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.page.sections
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.page.title = title.into();
    }

    pub const fn set_status(&mut self, status: PageStatus) {
        self.page.status = status;
    }

    pub fn set_admission_modal(&mut self, config: Option<crate::model::AdmissionModalConfig>) {
        self.page.admission_modal_config = config;
    }

    /// Append a new section: fresh id, title derived from the template key
    /// (suffixed with the variant when one is chosen), visible, seeded data.
    pub fn add_section(
        &mut self,
        key: TemplateKey,
        variant: Option<&str>,
        seed: JsonMap,
    ) -> &Section {
        let mut data = seed;
        if let Some(variant) = variant {
            data.insert("variant".to_string(), Value::String(variant.to_string()));
        }

        let mut title = key.as_str().to_case(Case::Title);
        if let Some(variant) = variant {
            title.push_str(&format!(" ({variant})"));
        }

        obs::record(&EngineEvent::SectionAdded {
            key: key.to_string(),
        });

        let index = self.page.sections.len();
        self.page.sections.push(Section {
            id: SectionId::generate(),
            template_key: key,
            title,
            visible: true,
            order: index as u32,
            data,
        });

        &self.page.sections[index]
    }

    /// Append a section seeded from a picker preset.
    pub fn add_from_preset(&mut self, preset: &Preset) -> &Section {
        self.add_section(preset.key.clone(), preset.variant, preset.demo_data.clone())
    }

    /// Move the section at display index `from` to display index `to`;
    /// every section's own fields are untouched, only `order` changes.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ComposeError> {
        let len = self.page.sections.len();
        if from >= len {
            return Err(ComposeError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(ComposeError::IndexOutOfBounds { index: to, len });
        }

        let section = self.page.sections.remove(from);
        self.page.sections.insert(to, section);
        self.renumber();

        obs::record(&EngineEvent::SectionsReordered { from, to });
        Ok(())
    }

    /// Flip one section's visibility; returns the new state.
    pub fn toggle_visibility(&mut self, id: &SectionId) -> Result<bool, ComposeError> {
        let section = self.section_mut(id)?;
        section.visible = !section.visible;
        let visible = section.visible;

        obs::record(&EngineEvent::VisibilityToggled { visible });
        Ok(visible)
    }

    /// Remove one section by id.
    pub fn delete(&mut self, id: &SectionId) -> Result<(), ComposeError> {
        let index = self
            .page
            .sections
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| ComposeError::UnknownSection { id: id.clone() })?;

        self.page.sections.remove(index);
        self.renumber();

        obs::record(&EngineEvent::SectionRemoved);
        Ok(())
    }

    /// Replace one section's data wholesale with a form session's committed
    /// output.
    pub fn replace_data(&mut self, id: &SectionId, data: JsonMap) -> Result<(), ComposeError> {
        self.section_mut(id)?.data = data;
        Ok(())
    }

    /// Open a form session for one section, against its catalog schema.
    pub fn edit_section(&self, id: &SectionId) -> Result<FormSession<'static>, ComposeError> {
        let section = self
            .page
            .sections
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| ComposeError::UnknownSection { id: id.clone() })?;

        let schema = Catalog::get(&section.template_key);
        Ok(FormSession::new(schema, section.data.clone()))
    }

    /// Persist the whole page in one call. On failure the in-memory state
    /// is untouched; the caller retries.
    pub fn save(&self, store: &dyn PageStore) -> Result<Page, StoreError> {
        let saved = store.update_page(&self.page.slug, &self.page)?;

        obs::record(&EngineEvent::PageSaved {
            slug: self.page.slug.to_string(),
            sections: self.page.sections.len(),
        });

        Ok(saved)
    }

    /// Persist a page being saved for the first time under its slug.
    pub fn create(&self, store: &dyn PageStore) -> Result<Page, StoreError> {
        let created = store.create_page(&self.page)?;

        obs::record(&EngineEvent::PageSaved {
            slug: self.page.slug.to_string(),
            sections: self.page.sections.len(),
        });

        Ok(created)
    }

    fn section_mut(&mut self, id: &SectionId) -> Result<&mut Section, ComposeError> {
        self.page
            .sections
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| ComposeError::UnknownSection { id: id.clone() })
    }

    fn renumber(&mut self) {
        for (index, section) in self.page.sections.iter_mut().enumerate() {
            section.order = index as u32;
        }
    }
}

///
/// ComposeError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ComposeError {
    #[error("section index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unknown section id: '{id}'")]
    UnknownSection { id: SectionId },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPageStore;
    use pagecraft_schema::preset::presets;
    use serde_json::json;

    fn session() -> Composition {
        Composition::new(Slug::new("home").unwrap(), "Home")
    }

    #[test]
    fn add_derives_title_from_key_and_variant() {
        let mut comp = session();
        let section = comp.add_section(TemplateKey::HeroSection, Some("hero"), JsonMap::new());

        assert_eq!(section.title, "Hero Section (hero)");
        assert!(section.visible);
        assert_eq!(section.order, 0);
        assert_eq!(section.data["variant"], json!("hero"));

        let section = comp.add_section(TemplateKey::AboutBrief, None, JsonMap::new());
        assert_eq!(section.title, "About Brief");
        assert_eq!(section.order, 1);
    }

    #[test]
    fn preset_seed_data_lands_on_the_new_section() {
        let mut comp = session();
        let preset = &presets()[0]; // hero banner
        let section = comp.add_from_preset(preset);

        assert_eq!(section.template_key, TemplateKey::DesignOne);
        assert_eq!(section.data["variant"], json!("hero"));
        assert!(section.data.contains_key("buttons"));
    }

    #[test]
    fn reorder_moves_index_two_to_front() {
        let mut comp = session();
        comp.add_section(TemplateKey::HeroSection, None, JsonMap::new());
        comp.add_section(TemplateKey::DesignTwo, None, JsonMap::new());
        comp.add_section(TemplateKey::DesignThree, None, JsonMap::new());
        let before: Vec<SectionId> = comp.sections().iter().map(|s| s.id.clone()).collect();

        comp.reorder(2, 0).unwrap();

        let after: Vec<SectionId> = comp.sections().iter().map(|s| s.id.clone()).collect();
        assert_eq!(after, vec![before[2].clone(), before[0].clone(), before[1].clone()]);
        assert_eq!(
            comp.sections().iter().map(|s| s.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        // untouched fields survive the move
        assert_eq!(comp.sections()[0].template_key, TemplateKey::DesignThree);
    }

    #[test]
    fn reorder_rejects_out_of_bounds_indices() {
        let mut comp = session();
        comp.add_section(TemplateKey::HeroSection, None, JsonMap::new());
        assert!(matches!(
            comp.reorder(0, 3),
            Err(ComposeError::IndexOutOfBounds { index: 3, .. })
        ));
    }

    #[test]
    fn toggle_flips_without_reordering() {
        let mut comp = session();
        comp.add_section(TemplateKey::HeroSection, None, JsonMap::new());
        comp.add_section(TemplateKey::DesignTwo, None, JsonMap::new());
        let id = comp.sections()[0].id.clone();

        assert_eq!(comp.toggle_visibility(&id).unwrap(), false);
        assert_eq!(comp.sections()[0].id, id);
        assert_eq!(comp.sections().len(), 2);
        assert_eq!(comp.toggle_visibility(&id).unwrap(), true);
    }

    #[test]
    fn delete_removes_by_id_and_renumbers() {
        let mut comp = session();
        comp.add_section(TemplateKey::HeroSection, None, JsonMap::new());
        comp.add_section(TemplateKey::DesignTwo, None, JsonMap::new());
        let first = comp.sections()[0].id.clone();

        comp.delete(&first).unwrap();
        assert_eq!(comp.sections().len(), 1);
        assert_eq!(comp.sections()[0].order, 0);

        assert!(matches!(
            comp.delete(&first),
            Err(ComposeError::UnknownSection { .. })
        ));
    }

    #[test]
    fn edit_commit_replace_round_trip() {
        let mut comp = session();
        comp.add_section(TemplateKey::AboutBrief, None, JsonMap::new());
        let id = comp.sections()[0].id.clone();

        let mut form = comp.edit_section(&id).unwrap();
        form.set_value(&"title".into(), json!("Our Institute")).unwrap();
        let data = form.commit().unwrap();
        comp.replace_data(&id, data).unwrap();

        assert_eq!(comp.sections()[0].data["title"], json!("Our Institute"));
    }

    #[test]
    fn save_then_load_round_trips_the_section_list() {
        let store = MemoryPageStore::new();
        let mut comp = session();
        comp.add_section(TemplateKey::HeroSection, None, JsonMap::new());
        comp.add_section(TemplateKey::DesignTwo, None, JsonMap::new());
        comp.reorder(1, 0).unwrap();
        comp.set_status(PageStatus::Published);

        comp.create(&store).unwrap();
        let reloaded = Composition::load(&store, &comp.page().slug).unwrap();

        let before: Vec<_> = comp.sections().iter().map(|s| s.id.clone()).collect();
        let after: Vec<_> = reloaded.sections().iter().map(|s| s.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(reloaded.page().status, PageStatus::Published);
    }

    #[test]
    fn failed_save_keeps_in_memory_edits() {
        let store = MemoryPageStore::new();
        let mut comp = session();
        comp.add_section(TemplateKey::HeroSection, None, JsonMap::new());

        // page was never created; update fails with NotFound
        assert!(comp.save(&store).is_err());
        assert_eq!(comp.sections().len(), 1);
    }
}

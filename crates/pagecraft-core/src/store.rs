//! Collaborator boundaries: page storage and file storage.
//!
//! The engine consumes these as plain request/response traits; transport,
//! auth, and retry policy belong to the implementations. Each call is a
//! single outstanding request — nothing here retries automatically.

use crate::model::{Page, PageStatus, Slug};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("page not found: '{slug}'")]
    NotFound { slug: Slug },

    /// Transport or backend failure; the operation may be retried by the
    /// user, never automatically.
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },
}

///
/// PageSummary
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub slug: Slug,
    pub title: String,
    pub status: PageStatus,
}

///
/// PageStore
///
/// Pages are replaced wholesale; the storage layer never patches at the
/// section level.
///

pub trait PageStore {
    fn get_page_by_slug(&self, slug: &Slug) -> Result<Page, StoreError>;
    fn create_page(&self, page: &Page) -> Result<Page, StoreError>;
    fn update_page(&self, slug: &Slug, page: &Page) -> Result<Page, StoreError>;
    fn delete_page(&self, slug: &Slug) -> Result<(), StoreError>;
    fn list_pages(&self) -> Result<Vec<PageSummary>, StoreError>;
}

///
/// UploadedFile
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UploadedFile {
    pub url: String,
}

///
/// FileStore
///

pub trait FileStore {
    /// Size/type constraints are the caller's responsibility.
    fn upload_file(&self, name: &str, bytes: &[u8]) -> Result<UploadedFile, StoreError>;
}

///
/// MemoryPageStore
///
/// In-memory `PageStore` used by tests and single-process tooling.
///

#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: RefCell<BTreeMap<Slug, Page>>,
}

impl MemoryPageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryPageStore {
    fn get_page_by_slug(&self, slug: &Slug) -> Result<Page, StoreError> {
        self.pages
            .borrow()
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { slug: slug.clone() })
    }

    fn create_page(&self, page: &Page) -> Result<Page, StoreError> {
        self.pages
            .borrow_mut()
            .insert(page.slug.clone(), page.clone());
        Ok(page.clone())
    }

    fn update_page(&self, slug: &Slug, page: &Page) -> Result<Page, StoreError> {
        let mut pages = self.pages.borrow_mut();
        if !pages.contains_key(slug) {
            return Err(StoreError::NotFound { slug: slug.clone() });
        }
        pages.insert(slug.clone(), page.clone());

        Ok(page.clone())
    }

    fn delete_page(&self, slug: &Slug) -> Result<(), StoreError> {
        self.pages
            .borrow_mut()
            .remove(slug)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound { slug: slug.clone() })
    }

    fn list_pages(&self) -> Result<Vec<PageSummary>, StoreError> {
        Ok(self
            .pages
            .borrow()
            .values()
            .map(|page| PageSummary {
                slug: page.slug.clone(),
                title: page.title.clone(),
                status: page.status,
            })
            .collect())
    }
}

///
/// MemoryFileStore
///

#[derive(Debug, Default)]
pub struct MemoryFileStore {
    uploads: RefCell<Vec<String>>,
}

impl MemoryFileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn upload_count(&self) -> usize {
        self.uploads.borrow().len()
    }
}

impl FileStore for MemoryFileStore {
    fn upload_file(&self, name: &str, _bytes: &[u8]) -> Result<UploadedFile, StoreError> {
        let mut uploads = self.uploads.borrow_mut();
        let url = format!("mem://uploads/{}/{name}", uploads.len());
        uploads.push(url.clone());

        Ok(UploadedFile { url })
    }
}

///
/// TESTS
///
